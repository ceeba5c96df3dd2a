use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level questionnaire partition. Every question belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Psychometric,
    Technical,
    Domain,
    Wiscar,
}

impl Section {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Psychometric,
            Self::Technical,
            Self::Domain,
            Self::Wiscar,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical & Aptitude",
            Self::Domain => "Domain Knowledge",
            Self::Wiscar => "WISCAR",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Domain => "domain",
            Self::Wiscar => "wiscar",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|section| section.tag().eq_ignore_ascii_case(tag.trim()))
    }
}

/// The six WISCAR traits. Only wiscar-section questions aggregate by trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarTrait {
    Will,
    Interest,
    Skill,
    Cognition,
    Ability,
    RealWorldFit,
}

impl WiscarTrait {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognition,
            Self::Ability,
            Self::RealWorldFit,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognition => "Cognition",
            Self::Ability => "Ability",
            Self::RealWorldFit => "Real-world Fit",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Cognition => "cognition",
            Self::Ability => "ability",
            Self::RealWorldFit => "realWorldFit",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|candidate| candidate.tag() == tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
    Scenario,
    Boolean,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Likert => "Likert scale",
            Self::MultipleChoice => "Multiple choice",
            Self::Scenario => "Scenario",
            Self::Boolean => "Yes / No",
        }
    }
}

/// Static questionnaire item. Option position encodes intensity, low to high.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub section: Section,
    pub category: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: Vec<&'static str>,
    pub weight: f64,
    #[serde(rename = "trait")]
    pub trait_tag: &'static str,
}

impl Question {
    /// Group whose weighted mean this question feeds. `None` only for a wiscar
    /// question with an unrecognised trait, which bank validation rejects.
    pub fn aggregation_group(&self) -> Option<AggregationGroup> {
        match self.section {
            Section::Wiscar => WiscarTrait::from_tag(self.trait_tag).map(AggregationGroup::Trait),
            section => Some(AggregationGroup::Section(section)),
        }
    }

    pub fn option_label(&self, index: usize) -> Option<&'static str> {
        self.options.get(index).copied()
    }
}

/// Accumulation key used by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationGroup {
    Section(Section),
    Trait(WiscarTrait),
}

/// Raw captured value: a numeric option index or a string-encoded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Index(i64),
    Text(String),
}

impl AnswerValue {
    /// Resolves the raw value to an option index in `[0, option_count)`.
    pub fn option_index(&self, option_count: usize) -> Option<usize> {
        let raw = match self {
            AnswerValue::Index(value) => *value,
            AnswerValue::Text(text) => text.trim().parse::<i64>().ok()?,
        };
        let index = usize::try_from(raw).ok()?;
        (index < option_count).then_some(index)
    }
}

impl From<usize> for AnswerValue {
    fn from(value: usize) -> Self {
        AnswerValue::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    pub timestamp: DateTime<Utc>,
}

/// Ordered answers with at most one entry per question id.
///
/// Recording an id that already has an answer replaces the value and timestamp
/// in place, so the original capture order is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        question_id: impl Into<String>,
        value: AnswerValue,
        timestamp: DateTime<Utc>,
    ) {
        let question_id = question_id.into();
        match self
            .answers
            .iter_mut()
            .find(|answer| answer.question_id == question_id)
        {
            Some(existing) => {
                existing.value = value;
                existing.timestamp = timestamp;
            }
            None => self.answers.push(Answer {
                question_id,
                value,
                timestamp,
            }),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    pub(crate) fn value_map(&self) -> HashMap<&str, &AnswerValue> {
        self.answers
            .iter()
            .map(|answer| (answer.question_id.as_str(), &answer.value))
            .collect()
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.answers
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.record(answer.question_id, answer.value, answer.timestamp);
        }
        set
    }
}
