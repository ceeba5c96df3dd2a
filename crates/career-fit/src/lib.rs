//! Career-fit questionnaire scoring.
//!
//! The [`assessment`] module holds the question bank, the scoring engine that
//! turns an answer set into weighted section and trait scores, and the result
//! builder that maps those scores to a recommendation tier and advice.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
