use super::super::scoring::AssessmentScore;

const STRONG: f64 = 80.0;
const MODERATE: f64 = 60.0;

/// Which score an insight is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsightSource {
    Psychometric,
    Technical,
    Domain,
    Wiscar,
}

impl InsightSource {
    const fn ordered() -> [Self; 4] {
        [Self::Psychometric, Self::Technical, Self::Domain, Self::Wiscar]
    }

    fn score(self, scores: &AssessmentScore) -> f64 {
        match self {
            Self::Psychometric => scores.psychometric,
            Self::Technical => scores.technical,
            Self::Domain => scores.domain,
            Self::Wiscar => scores.wiscar_average(),
        }
    }

    /// Copy for the strong, moderate and developmental buckets.
    const fn statements(self) -> [&'static str; 3] {
        match self {
            Self::Psychometric => [
                "Your personality traits and motivation strongly align with cloud security roles.",
                "You show good potential for cloud security, with some areas for personal development.",
                "Consider developing stress management and analytical thinking skills for security roles.",
            ],
            Self::Technical => [
                "Your technical foundation is strong for advanced cloud security topics.",
                "Brush up on networking and Linux fundamentals before diving into cloud security.",
                "Start with foundational IT courses before pursuing cloud security specialization.",
            ],
            Self::Domain => [
                "You demonstrate solid understanding of cloud security concepts and practices.",
                "Focus on cloud provider security services and compliance frameworks.",
                "Begin with cloud computing basics before tackling security-specific topics.",
            ],
            Self::Wiscar => [
                "Your learning profile shows excellent readiness for skill development in this field.",
                "You have good learning potential with focused effort on skill building.",
                "Consider developing better study habits and seeking mentorship in your learning journey.",
            ],
        }
    }

    fn statement(self, scores: &AssessmentScore) -> &'static str {
        let [strong, moderate, developmental] = self.statements();
        let score = self.score(scores);
        if score >= STRONG {
            strong
        } else if score >= MODERATE {
            moderate
        } else {
            developmental
        }
    }
}

/// One statement each for psychometric, technical, domain and WISCAR, in that order.
pub(crate) fn generate_insights(scores: &AssessmentScore) -> Vec<String> {
    InsightSource::ordered()
        .into_iter()
        .map(|source| source.statement(scores).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scoring::WiscarScores;

    fn uniform(value: f64) -> AssessmentScore {
        AssessmentScore {
            psychometric: value,
            technical: value,
            domain: value,
            wiscar: WiscarScores {
                will: value,
                interest: value,
                skill: value,
                cognition: value,
                ability: value,
                real_world_fit: value,
            },
            overall: value,
        }
    }

    #[test]
    fn produces_one_insight_per_source() {
        assert_eq!(generate_insights(&uniform(50.0)).len(), 4);
    }

    #[test]
    fn buckets_follow_eighty_and_sixty_cutoffs() {
        let strong = generate_insights(&uniform(80.0));
        assert!(strong[0].contains("strongly align"));
        assert!(strong[3].contains("excellent readiness"));

        let moderate = generate_insights(&uniform(79.9));
        assert!(moderate[1].starts_with("Brush up"));
        assert!(moderate[3].contains("good learning potential"));

        let developmental = generate_insights(&uniform(59.9));
        assert!(developmental[2].starts_with("Begin with cloud computing basics"));
    }

    #[test]
    fn wiscar_insight_reads_trait_average() {
        let mut scores = uniform(0.0);
        scores.wiscar.will = 100.0;
        scores.wiscar.interest = 100.0;
        scores.wiscar.skill = 100.0;
        scores.wiscar.cognition = 100.0;
        scores.wiscar.ability = 100.0;
        // average 83.3 with one trait at zero
        let insights = generate_insights(&scores);
        assert!(insights[3].contains("excellent readiness"));
        assert!(insights[0].starts_with("Consider developing stress management"));
    }
}
