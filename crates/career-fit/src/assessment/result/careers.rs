use super::super::domain::WiscarTrait;
use super::super::scoring::AssessmentScore;
use serde::{Deserialize, Serialize};

/// A single score read by career-path rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMetric {
    Psychometric,
    Technical,
    Domain,
    Overall,
    Trait(WiscarTrait),
}

impl ScoreMetric {
    pub fn value(self, scores: &AssessmentScore) -> f64 {
        match self {
            Self::Psychometric => scores.psychometric,
            Self::Technical => scores.technical,
            Self::Domain => scores.domain,
            Self::Overall => scores.overall,
            Self::Trait(kind) => scores.wiscar.get(kind),
        }
    }
}

/// Gaps reported when `metric` falls below `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct SkillGapRule {
    pub metric: ScoreMetric,
    pub threshold: f64,
    pub gaps: &'static [&'static str],
}

impl SkillGapRule {
    pub fn gaps_for(&self, scores: &AssessmentScore) -> Vec<String> {
        if self.metric.value(scores) < self.threshold {
            self.gaps.iter().map(|gap| gap.to_string()).collect()
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareerTrack {
    CloudSecurityEngineer,
    SocAnalyst,
    CloudSecurityArchitect,
    DevSecOpsSpecialist,
}

impl CareerTrack {
    /// Definition order; used as the tie-break when alignments are equal.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CloudSecurityEngineer,
            Self::SocAnalyst,
            Self::CloudSecurityArchitect,
            Self::DevSecOpsSpecialist,
        ]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::CloudSecurityEngineer => "Cloud Security Engineer",
            Self::SocAnalyst => "Security Operations Center (SOC) Analyst - Cloud Focus",
            Self::CloudSecurityArchitect => "Cloud Security Architect",
            Self::DevSecOpsSpecialist => "DevSecOps Specialist",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::CloudSecurityEngineer => {
                "Designs and implements security controls for cloud infrastructure and applications."
            }
            Self::SocAnalyst => "Monitors and responds to security incidents in cloud environments.",
            Self::CloudSecurityArchitect => {
                "Designs secure cloud architectures and develops security policies and standards."
            }
            Self::DevSecOpsSpecialist => {
                "Integrates security practices into CI/CD pipelines and development workflows."
            }
        }
    }

    pub const fn skill_gap_rule(self) -> SkillGapRule {
        match self {
            Self::CloudSecurityEngineer => SkillGapRule {
                metric: ScoreMetric::Technical,
                threshold: 70.0,
                gaps: &["Cloud architecture", "Infrastructure as Code"],
            },
            Self::SocAnalyst => SkillGapRule {
                metric: ScoreMetric::Domain,
                threshold: 70.0,
                gaps: &["SIEM tools", "Log analysis", "Incident response"],
            },
            Self::CloudSecurityArchitect => SkillGapRule {
                metric: ScoreMetric::Overall,
                threshold: 80.0,
                gaps: &["Enterprise architecture", "Risk assessment", "Strategic thinking"],
            },
            Self::DevSecOpsSpecialist => SkillGapRule {
                metric: ScoreMetric::Technical,
                threshold: 75.0,
                gaps: &["Scripting", "Automation tools", "Container security"],
            },
        }
    }

    /// The three scores averaged (unweighted) into the alignment.
    pub const fn alignment_metrics(self) -> [ScoreMetric; 3] {
        match self {
            Self::CloudSecurityEngineer => [
                ScoreMetric::Technical,
                ScoreMetric::Domain,
                ScoreMetric::Trait(WiscarTrait::Skill),
            ],
            Self::SocAnalyst => [
                ScoreMetric::Psychometric,
                ScoreMetric::Domain,
                ScoreMetric::Trait(WiscarTrait::Will),
            ],
            Self::CloudSecurityArchitect => [
                ScoreMetric::Domain,
                ScoreMetric::Trait(WiscarTrait::Cognition),
                ScoreMetric::Trait(WiscarTrait::RealWorldFit),
            ],
            Self::DevSecOpsSpecialist => [
                ScoreMetric::Technical,
                ScoreMetric::Trait(WiscarTrait::Ability),
                ScoreMetric::Trait(WiscarTrait::Skill),
            ],
        }
    }

    pub fn alignment(self, scores: &AssessmentScore) -> f64 {
        let metrics = self.alignment_metrics();
        metrics
            .iter()
            .map(|metric| metric.value(scores))
            .sum::<f64>()
            / metrics.len() as f64
    }

    pub fn evaluate(self, scores: &AssessmentScore) -> CareerPath {
        CareerPath {
            title: self.title().to_string(),
            description: self.description().to_string(),
            skill_gaps: self.skill_gap_rule().gaps_for(scores),
            alignment: self.alignment(scores),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub skill_gaps: Vec<String>,
    pub alignment: f64,
}

/// All four paths, best alignment first. `sort_by` is stable, so equal
/// alignments keep definition order.
pub(crate) fn rank_career_paths(scores: &AssessmentScore) -> Vec<CareerPath> {
    let mut paths: Vec<CareerPath> = CareerTrack::ordered()
        .into_iter()
        .map(|track| track.evaluate(scores))
        .collect();
    paths.sort_by(|a, b| b.alignment.total_cmp(&a.alignment));
    paths
}
