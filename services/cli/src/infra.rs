use career_fit::assessment::{
    AnswerValue, AssessmentSession, AssessmentStore, JsonFileStore, ScoringEngine, Section,
};
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Engine plus the file-backed snapshot store every command works against.
pub(crate) struct AssessmentContext {
    pub(crate) engine: ScoringEngine,
    pub(crate) store: AssessmentStore<JsonFileStore>,
}

impl AssessmentContext {
    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::with_store_dir(config.storage.store_dir.clone())
    }

    pub(crate) fn with_store_dir(dir: PathBuf) -> Result<Self, AppError> {
        Ok(Self {
            engine: ScoringEngine::standard()?,
            store: AssessmentStore::new(JsonFileStore::new(dir)),
        })
    }

    /// Resumes saved progress, or starts fresh when none (or only garbage) is stored.
    pub(crate) fn load_session(
        &self,
        now: DateTime<Utc>,
    ) -> Result<AssessmentSession<'_>, AppError> {
        Ok(match self.store.load_progress()? {
            Some(snapshot) => AssessmentSession::resume(&self.engine, snapshot),
            None => AssessmentSession::start(&self.engine, now),
        })
    }

    pub(crate) fn save_session(&self, session: &AssessmentSession<'_>) -> Result<(), AppError> {
        self.store.save_progress(&session.snapshot())?;
        Ok(())
    }
}

pub(crate) fn parse_section(raw: &str) -> Result<Section, String> {
    Section::from_tag(raw).ok_or_else(|| {
        format!("unknown section '{raw}' (expected psychometric, technical, domain or wiscar)")
    })
}

/// Integers become option indices; anything else is kept as text and
/// validated against the question when recorded.
pub(crate) fn parse_answer_value(raw: &str) -> AnswerValue {
    match raw.trim().parse::<i64>() {
        Ok(index) => AnswerValue::Index(index),
        Err(_) => AnswerValue::Text(raw.trim().to_string()),
    }
}
