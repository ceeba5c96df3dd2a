use serde::{Deserialize, Serialize};

/// Discrete fit tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    StronglyRecommended,
    Recommended,
    ConsiderAlternatives,
    NotRecommended,
}

impl Recommendation {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::StronglyRecommended,
            Self::Recommended,
            Self::ConsiderAlternatives,
            Self::NotRecommended,
        ]
    }

    /// Lower bound (inclusive) of the overall score for each tier.
    pub const fn threshold(self) -> f64 {
        match self {
            Self::StronglyRecommended => 85.0,
            Self::Recommended => 65.0,
            Self::ConsiderAlternatives => 50.0,
            Self::NotRecommended => f64::NEG_INFINITY,
        }
    }

    /// First tier, top-down, whose threshold the score reaches.
    pub fn from_score(overall: f64) -> Self {
        Self::ordered()
            .into_iter()
            .find(|tier| overall >= tier.threshold())
            .unwrap_or(Self::NotRecommended)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyRecommended => "Strongly Recommended",
            Self::Recommended => "Recommended",
            Self::ConsiderAlternatives => "Consider Alternatives",
            Self::NotRecommended => "Not Recommended",
        }
    }

    pub const fn next_steps(self) -> [&'static str; 4] {
        match self {
            Self::StronglyRecommended => [
                "Enroll in advanced cloud security certification programs",
                "Start building hands-on projects in cloud security",
                "Join cloud security communities and forums",
                "Consider specialized training in your preferred cloud platform",
            ],
            Self::Recommended => [
                "Strengthen your foundational knowledge in identified weak areas",
                "Complete a cloud security bootcamp or structured course",
                "Get hands-on experience with cloud security tools",
                "Network with cloud security professionals",
            ],
            Self::ConsiderAlternatives => [
                "Explore related fields like general IT security or network administration",
                "Improve technical skills through online courses and practice",
                "Consider mentorship or guided learning programs",
                "Reassess after 6 months of focused preparation",
            ],
            Self::NotRecommended => [
                "Focus on building fundamental IT and networking skills first",
                "Explore alternative technology career paths",
                "Consider roles in IT support or system administration",
                "Develop analytical and problem-solving skills",
            ],
        }
    }
}
