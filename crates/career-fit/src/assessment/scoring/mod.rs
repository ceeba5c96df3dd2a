mod aggregate;
mod normalize;

use super::bank::{QuestionBank, QuestionBankError};
use super::domain::{AggregationGroup, AnswerSet, Section, WiscarTrait};
use super::result::{generate_result, AssessmentResult};
use aggregate::GroupTotals;
use normalize::normalized_score;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Fixed contribution of each component to the overall score.
pub const PSYCHOMETRIC_WEIGHT: f64 = 0.30;
pub const TECHNICAL_WEIGHT: f64 = 0.25;
pub const DOMAIN_WEIGHT: f64 = 0.25;
pub const WISCAR_WEIGHT: f64 = 0.20;

/// Stateless scorer over a validated question bank.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: QuestionBank,
}

impl ScoringEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn standard() -> Result<Self, QuestionBankError> {
        QuestionBank::standard().map(Self::new)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Aggregates the answer set into section, trait and overall scores.
    ///
    /// Unanswered questions, answers to unknown ids, and values that do not
    /// resolve to a valid option index are left out of both the numerator and
    /// the weight sum of their group.
    pub fn calculate_scores(&self, answers: &AnswerSet) -> AssessmentScore {
        let values = answers.value_map();
        let mut totals = GroupTotals::default();

        for question in self.bank.questions() {
            let Some(value) = values.get(question.id) else {
                continue;
            };
            let Some(index) = value.option_index(question.options.len()) else {
                warn!(
                    question = question.id,
                    ?value,
                    options = question.options.len(),
                    "ignoring answer that does not resolve to an option"
                );
                continue;
            };
            let Some(group) = question.aggregation_group() else {
                continue;
            };

            let normalized = normalized_score(index, question.options.len());
            totals.add(group, normalized, question.weight);
        }

        let section = |section| totals.mean(AggregationGroup::Section(section));
        let wiscar_trait = |kind| totals.mean(AggregationGroup::Trait(kind));

        let wiscar = WiscarScores {
            will: wiscar_trait(WiscarTrait::Will),
            interest: wiscar_trait(WiscarTrait::Interest),
            skill: wiscar_trait(WiscarTrait::Skill),
            cognition: wiscar_trait(WiscarTrait::Cognition),
            ability: wiscar_trait(WiscarTrait::Ability),
            real_world_fit: wiscar_trait(WiscarTrait::RealWorldFit),
        };

        let psychometric = section(Section::Psychometric);
        let technical = section(Section::Technical);
        let domain = section(Section::Domain);

        let overall = (psychometric * PSYCHOMETRIC_WEIGHT
            + technical * TECHNICAL_WEIGHT
            + domain * DOMAIN_WEIGHT
            + wiscar.average() * WISCAR_WEIGHT)
            .clamp(0.0, 100.0);

        debug!(
            answered = values.len(),
            psychometric,
            technical,
            domain,
            wiscar_average = wiscar.average(),
            overall,
            "scored assessment"
        );

        AssessmentScore {
            psychometric,
            technical,
            domain,
            wiscar,
            overall,
        }
    }

    /// Scores the answers and derives the full result in one pass.
    pub fn evaluate(&self, answers: &AnswerSet) -> AssessmentResult {
        generate_result(self.calculate_scores(answers))
    }
}

/// Per-section, per-trait and composite scores, each in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScore {
    pub psychometric: f64,
    pub technical: f64,
    pub domain: f64,
    pub wiscar: WiscarScores,
    pub overall: f64,
}

impl AssessmentScore {
    /// Section score; the wiscar section reports the unweighted trait average.
    pub fn section(&self, section: Section) -> f64 {
        match section {
            Section::Psychometric => self.psychometric,
            Section::Technical => self.technical,
            Section::Domain => self.domain,
            Section::Wiscar => self.wiscar.average(),
        }
    }

    pub fn wiscar_average(&self) -> f64 {
        self.wiscar.average()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognition: f64,
    pub ability: f64,
    pub real_world_fit: f64,
}

impl WiscarScores {
    pub fn get(&self, kind: WiscarTrait) -> f64 {
        match kind {
            WiscarTrait::Will => self.will,
            WiscarTrait::Interest => self.interest,
            WiscarTrait::Skill => self.skill,
            WiscarTrait::Cognition => self.cognition,
            WiscarTrait::Ability => self.ability,
            WiscarTrait::RealWorldFit => self.real_world_fit,
        }
    }

    /// Unweighted mean across the six traits.
    pub fn average(&self) -> f64 {
        let traits = WiscarTrait::ordered();
        traits.iter().map(|kind| self.get(*kind)).sum::<f64>() / traits.len() as f64
    }
}
