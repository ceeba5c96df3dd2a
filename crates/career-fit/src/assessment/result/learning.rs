use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl StageLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Inclusion gates overlap: a stage is a suggested study block, not a
    /// placement, so 75 yields both intermediate and advanced.
    pub fn includes(self, overall: f64) -> bool {
        match self {
            Self::Beginner => overall < 60.0,
            Self::Intermediate => overall >= 40.0,
            Self::Advanced => overall >= 70.0,
        }
    }

    pub const fn topics(self) -> &'static [&'static str] {
        match self {
            Self::Beginner => &[
                "Cloud computing fundamentals",
                "Networking basics",
                "Linux command line",
                "Basic cybersecurity concepts",
            ],
            Self::Intermediate => &[
                "Cloud security architecture",
                "Identity and Access Management",
                "Encryption and key management",
                "Compliance frameworks",
            ],
            Self::Advanced => &[
                "Advanced threat detection",
                "Security automation",
                "Incident response",
                "Cloud forensics",
            ],
        }
    }

    pub const fn tools(self) -> &'static [&'static str] {
        match self {
            Self::Beginner => &[
                "AWS Free Tier",
                "Linux virtual machines",
                "Network simulation tools",
            ],
            Self::Intermediate => &[
                "AWS IAM",
                "Azure Security Center",
                "Terraform",
                "CloudFormation",
            ],
            Self::Advanced => &[
                "AWS GuardDuty",
                "Splunk",
                "Kubernetes security",
                "Infrastructure as Code security",
            ],
        }
    }

    pub const fn certifications(self) -> &'static [&'static str] {
        match self {
            Self::Beginner => &[
                "AWS Cloud Practitioner",
                "CompTIA Network+",
                "CompTIA Security+",
            ],
            Self::Intermediate => &[
                "AWS Certified Security - Specialty",
                "Azure Security Engineer",
                "CISSP",
            ],
            Self::Advanced => &["GCLD", "CISSP", "SABSA", "OSCP Cloud"],
        }
    }

    pub const fn duration(self) -> &'static str {
        match self {
            Self::Beginner => "3-6 months",
            Self::Intermediate => "6-12 months",
            Self::Advanced => "12+ months",
        }
    }

    pub fn to_stage(self) -> LearningStage {
        LearningStage {
            stage: self,
            topics: owned(self.topics()),
            tools: owned(self.tools()),
            certifications: owned(self.certifications()),
            duration: self.duration().to_string(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStage {
    pub stage: StageLevel,
    pub topics: Vec<String>,
    pub tools: Vec<String>,
    pub certifications: Vec<String>,
    pub duration: String,
}

pub(crate) fn learning_path(overall: f64) -> Vec<LearningStage> {
    StageLevel::ordered()
        .into_iter()
        .filter(|level| level.includes(overall))
        .map(StageLevel::to_stage)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(overall: f64) -> Vec<StageLevel> {
        learning_path(overall)
            .into_iter()
            .map(|stage| stage.stage)
            .collect()
    }

    #[test]
    fn gates_overlap_across_the_range() {
        assert_eq!(levels(0.0), vec![StageLevel::Beginner]);
        assert_eq!(levels(39.9), vec![StageLevel::Beginner]);
        assert_eq!(levels(40.0), vec![StageLevel::Beginner, StageLevel::Intermediate]);
        assert_eq!(levels(45.0), vec![StageLevel::Beginner, StageLevel::Intermediate]);
        assert_eq!(levels(60.0), vec![StageLevel::Intermediate]);
        assert_eq!(levels(65.0), vec![StageLevel::Intermediate]);
        assert_eq!(levels(70.0), vec![StageLevel::Intermediate, StageLevel::Advanced]);
        assert_eq!(levels(75.0), vec![StageLevel::Intermediate, StageLevel::Advanced]);
        assert_eq!(levels(100.0), vec![StageLevel::Intermediate, StageLevel::Advanced]);
    }

    #[test]
    fn stage_content_is_copied_from_catalog() {
        let stage = StageLevel::Advanced.to_stage();
        assert_eq!(stage.duration, "12+ months");
        assert!(stage.certifications.contains(&"OSCP Cloud".to_string()));
        assert_eq!(stage.topics.len(), 4);
    }
}
