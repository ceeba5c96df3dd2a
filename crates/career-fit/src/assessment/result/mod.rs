mod careers;
mod insights;
mod learning;
mod recommendation;

pub use careers::{CareerPath, CareerTrack, ScoreMetric, SkillGapRule};
pub use learning::{LearningStage, StageLevel};
pub use recommendation::Recommendation;

use super::scoring::AssessmentScore;
use careers::rank_career_paths;
use insights::generate_insights;
use learning::learning_path;
use serde::{Deserialize, Serialize};

/// Everything the results screen shows, derived from one score snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub scores: AssessmentScore,
    pub recommendation: Recommendation,
    pub confidence_score: f64,
    pub insights: Vec<String>,
    pub career_paths: Vec<CareerPath>,
    pub learning_path: Vec<LearningStage>,
    pub next_steps: Vec<String>,
}

pub fn generate_result(scores: AssessmentScore) -> AssessmentResult {
    let confidence_score = scores.overall;
    let recommendation = Recommendation::from_score(confidence_score);

    AssessmentResult {
        recommendation,
        confidence_score,
        insights: generate_insights(&scores),
        career_paths: rank_career_paths(&scores),
        learning_path: learning_path(scores.overall),
        next_steps: recommendation
            .next_steps()
            .iter()
            .map(|step| step.to_string())
            .collect(),
        scores,
    }
}

impl AssessmentResult {
    pub fn top_career_path(&self) -> Option<&CareerPath> {
        self.career_paths.first()
    }
}

/// Renders elapsed milliseconds as `m:ss`.
pub fn format_duration(duration_ms: i64) -> String {
    let duration_ms = duration_ms.max(0);
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{minutes}:{seconds:02}")
}
