use super::domain::{Question, QuestionKind, Section};
use std::collections::HashSet;

/// Validation failures for a question bank. Raised once, at construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuestionBankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("question '{id}' has {count} option(s); at least 2 are required")]
    TooFewOptions { id: String, count: usize },
    #[error("question '{id}' has weight {weight}; weights must be positive and finite")]
    InvalidWeight { id: String, weight: f64 },
    #[error("wiscar question '{id}' has unknown trait '{trait_tag}'")]
    UnknownWiscarTrait { id: String, trait_tag: String },
}

/// Immutable, validated, ordered question sequence.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(QuestionBankError::DuplicateId(question.id.to_string()));
            }
            if question.options.len() < 2 {
                return Err(QuestionBankError::TooFewOptions {
                    id: question.id.to_string(),
                    count: question.options.len(),
                });
            }
            if !question.weight.is_finite() || question.weight <= 0.0 {
                return Err(QuestionBankError::InvalidWeight {
                    id: question.id.to_string(),
                    weight: question.weight,
                });
            }
            if question.aggregation_group().is_none() {
                return Err(QuestionBankError::UnknownWiscarTrait {
                    id: question.id.to_string(),
                    trait_tag: question.trait_tag.to_string(),
                });
            }
        }

        Ok(Self { questions })
    }

    /// The cloud-security career questionnaire.
    pub fn standard() -> Result<Self, QuestionBankError> {
        Self::new(standard_questions())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }

    pub fn questions_for_section(&self, section: Section) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }
}

const IMPORTANCE: [&str; 5] = [
    "Not important",
    "Slightly important",
    "Moderately important",
    "Very important",
    "Extremely important",
];

const ENJOYMENT: [&str; 5] = ["Not at all", "A little", "Somewhat", "Quite a bit", "A great deal"];

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "interest-1",
            section: Section::Psychometric,
            category: "Interest Scale",
            prompt: "How excited are you about the prospect of securing cloud applications and networks?",
            kind: QuestionKind::Likert,
            options: vec![
                "Not at all excited",
                "Slightly excited",
                "Moderately excited",
                "Very excited",
                "Extremely excited",
            ],
            weight: 1.5,
            trait_tag: "interest",
        },
        Question {
            id: "interest-2",
            section: Section::Psychometric,
            category: "Interest Scale",
            prompt: "How interested are you in staying updated with the latest cybersecurity threats and trends?",
            kind: QuestionKind::Likert,
            options: vec![
                "Not interested",
                "Slightly interested",
                "Moderately interested",
                "Very interested",
                "Extremely interested",
            ],
            weight: 1.3,
            trait_tag: "interest",
        },
        Question {
            id: "interest-3",
            section: Section::Psychometric,
            category: "Interest Scale",
            prompt: "How much do you enjoy solving complex security puzzles and investigating incidents?",
            kind: QuestionKind::Likert,
            options: ENJOYMENT.to_vec(),
            weight: 1.4,
            trait_tag: "interest",
        },
        Question {
            id: "personality-1",
            section: Section::Psychometric,
            category: "Personality Fit",
            prompt: "You are working on a critical security incident at 2 AM. The pressure is high and stakeholders are asking for updates. How do you typically respond?",
            kind: QuestionKind::Scenario,
            options: vec![
                "I feel overwhelmed and struggle to think clearly under pressure",
                "I feel stressed but can still function adequately",
                "I remain calm and focused, working methodically through the problem",
                "I thrive under pressure and perform at my best during crises",
            ],
            weight: 2.0,
            trait_tag: "emotional_stability",
        },
        Question {
            id: "personality-2",
            section: Section::Psychometric,
            category: "Personality Fit",
            prompt: "How do you typically approach learning about new cloud security technologies?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "I prefer structured courses and step-by-step guides",
                "I like to experiment and learn through hands-on practice",
                "I enjoy reading documentation and research papers",
                "I prefer learning from colleagues and community forums",
            ],
            weight: 1.8,
            trait_tag: "openness",
        },
        Question {
            id: "personality-3",
            section: Section::Psychometric,
            category: "Personality Fit",
            prompt: "When implementing security policies, how important is attention to detail to you?",
            kind: QuestionKind::Likert,
            options: IMPORTANCE.to_vec(),
            weight: 2.2,
            trait_tag: "conscientiousness",
        },
        Question {
            id: "motivation-1",
            section: Section::Psychometric,
            category: "Motivation Drivers",
            prompt: "What primarily motivates you to pursue a career in cloud security?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "High salary potential and job security",
                "The intellectual challenge of protecting digital assets",
                "Making a positive impact on society and protecting people",
                "Career advancement opportunities and prestige",
            ],
            weight: 1.6,
            trait_tag: "motivation",
        },
        Question {
            id: "motivation-2",
            section: Section::Psychometric,
            category: "Motivation Drivers",
            prompt: "How important is continuous learning and skill development to you in your career?",
            kind: QuestionKind::Likert,
            options: IMPORTANCE.to_vec(),
            weight: 1.7,
            trait_tag: "growth_mindset",
        },
        Question {
            id: "cognitive-1",
            section: Section::Psychometric,
            category: "Cognitive Preferences",
            prompt: "Do you prefer solving well-defined security problems with clear procedures, or exploring undefined threats that require creative investigation?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "I strongly prefer well-defined problems with clear procedures",
                "I somewhat prefer structured problems",
                "I enjoy both equally",
                "I somewhat prefer exploring undefined problems",
                "I strongly prefer creative investigation of undefined threats",
            ],
            weight: 1.5,
            trait_tag: "cognitive_style",
        },
        Question {
            id: "grit-1",
            section: Section::Psychometric,
            category: "Resilience & Grit",
            prompt: "How do you handle setbacks when working on complex security projects?",
            kind: QuestionKind::Scenario,
            options: vec![
                "I often feel discouraged and consider giving up",
                "I feel frustrated but usually push through",
                "I view setbacks as learning opportunities",
                "I become more determined and focused when facing challenges",
            ],
            weight: 2.1,
            trait_tag: "grit",
        },
        Question {
            id: "grit-2",
            section: Section::Psychometric,
            category: "Resilience & Grit",
            prompt: "When facing a security incident that takes weeks to resolve, how do you maintain focus?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "I struggle to maintain focus over long periods",
                "I need frequent breaks and support to stay engaged",
                "I can maintain steady focus with occasional motivation",
                "I naturally sustain focus and energy throughout long projects",
            ],
            weight: 1.9,
            trait_tag: "persistence",
        },
        Question {
            id: "aptitude-1",
            section: Section::Technical,
            category: "General Aptitude",
            prompt: "If A is greater than B, and B is greater than C, and you know that C equals 10 and A equals 15, what can you conclude about B?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "B must be exactly 12.5",
                "B must be between 10 and 15 (exclusive)",
                "B could be any number greater than 10",
                "There is insufficient information to determine B",
            ],
            weight: 1.0,
            trait_tag: "logical_reasoning",
        },
        Question {
            id: "aptitude-2",
            section: Section::Technical,
            category: "General Aptitude",
            prompt: "A security system processes 1000 events per minute. If the error rate is 0.5%, how many false positives would you expect in 2 hours?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "600 false positives",
                "60 false positives",
                "6 false positives",
                "6000 false positives",
            ],
            weight: 1.2,
            trait_tag: "numerical_reasoning",
        },
        Question {
            id: "aptitude-3",
            section: Section::Technical,
            category: "General Aptitude",
            prompt: "In this sequence: 2, 6, 18, 54, ?, what is the next number?",
            kind: QuestionKind::MultipleChoice,
            options: vec!["108", "162", "216", "270"],
            weight: 1.0,
            trait_tag: "pattern_recognition",
        },
        Question {
            id: "prereq-1",
            section: Section::Technical,
            category: "Prerequisite Knowledge",
            prompt: "What protocol is primarily used for secure web traffic?",
            kind: QuestionKind::MultipleChoice,
            options: vec!["HTTP", "HTTPS", "FTP", "SMTP"],
            weight: 0.8,
            trait_tag: "networking_basics",
        },
        Question {
            id: "prereq-2",
            section: Section::Technical,
            category: "Prerequisite Knowledge",
            prompt: "Which Linux command would you use to view the contents of a log file in real-time?",
            kind: QuestionKind::MultipleChoice,
            options: vec!["cat", "grep", "tail -f", "ls -la"],
            weight: 0.9,
            trait_tag: "linux_basics",
        },
        Question {
            id: "prereq-3",
            section: Section::Technical,
            category: "Prerequisite Knowledge",
            prompt: "What does DNS stand for and what is its primary function?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "Domain Name System - translates domain names to IP addresses",
                "Data Network Security - encrypts network traffic",
                "Dynamic Network Storage - manages cloud storage",
                "Distributed Network Service - balances network load",
            ],
            weight: 0.8,
            trait_tag: "networking_basics",
        },
        Question {
            id: "domain-1",
            section: Section::Domain,
            category: "Cloud Security Fundamentals",
            prompt: "In the AWS Shared Responsibility Model, who is responsible for security \"in\" the cloud?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "AWS is responsible for all security",
                "The customer is responsible for all security",
                "AWS handles infrastructure, customer handles their data and applications",
                "Responsibility is shared equally for all components",
            ],
            weight: 2.0,
            trait_tag: "cloud_fundamentals",
        },
        Question {
            id: "domain-2",
            section: Section::Domain,
            category: "Identity and Access Management",
            prompt: "What is the principle of least privilege in IAM?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "Users should have no access by default",
                "Users should have only the minimum access needed to perform their job",
                "Only administrators should have access to cloud resources",
                "All users should have the same level of access",
            ],
            weight: 1.8,
            trait_tag: "iam_knowledge",
        },
        Question {
            id: "domain-3",
            section: Section::Domain,
            category: "Encryption & Data Protection",
            prompt: "What is the difference between encryption at rest and encryption in transit?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "At rest encrypts stored data, in transit encrypts data being transmitted",
                "At rest is for databases, in transit is for applications",
                "At rest uses symmetric encryption, in transit uses asymmetric encryption",
                "There is no difference, they are the same concept",
            ],
            weight: 1.9,
            trait_tag: "encryption_knowledge",
        },
        Question {
            id: "domain-4",
            section: Section::Domain,
            category: "Threat Detection",
            prompt: "You notice unusual API calls in your cloud environment at 3 AM. What should be your first step?",
            kind: QuestionKind::Scenario,
            options: vec![
                "Immediately shut down all access",
                "Check if the calls are from legitimate users or automated systems",
                "Ignore it as it might be scheduled maintenance",
                "Wait to see if the pattern continues",
            ],
            weight: 2.2,
            trait_tag: "threat_analysis",
        },
        Question {
            id: "domain-5",
            section: Section::Domain,
            category: "Compliance & Governance",
            prompt: "Which of these is a key requirement of GDPR that affects cloud security?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "All data must be stored in Europe",
                "Data subjects have the right to have their personal data deleted",
                "Only government entities can process personal data",
                "All data must be encrypted with 256-bit keys",
            ],
            weight: 1.6,
            trait_tag: "compliance_knowledge",
        },
        Question {
            id: "wiscar-will-1",
            section: Section::Wiscar,
            category: "Will",
            prompt: "How likely are you to continue pursuing difficult cloud security challenges even when progress is slow?",
            kind: QuestionKind::Likert,
            options: vec![
                "Very unlikely",
                "Unlikely",
                "Neither likely nor unlikely",
                "Likely",
                "Very likely",
            ],
            weight: 1.8,
            trait_tag: "will",
        },
        Question {
            id: "wiscar-interest-1",
            section: Section::Wiscar,
            category: "Interest",
            prompt: "How much do you enjoy reading about new cloud security vulnerabilities and attack methods?",
            kind: QuestionKind::Likert,
            options: ENJOYMENT.to_vec(),
            weight: 1.6,
            trait_tag: "interest",
        },
        Question {
            id: "wiscar-skill-1",
            section: Section::Wiscar,
            category: "Skill",
            prompt: "Rate your current ability to configure basic cloud security settings (IAM, firewalls, etc.)",
            kind: QuestionKind::Likert,
            options: vec![
                "No ability",
                "Basic ability",
                "Moderate ability",
                "Good ability",
                "Expert ability",
            ],
            weight: 1.4,
            trait_tag: "skill",
        },
        Question {
            id: "wiscar-cognition-1",
            section: Section::Wiscar,
            category: "Cognition",
            prompt: "How quickly do you typically understand new technical concepts in cybersecurity?",
            kind: QuestionKind::Likert,
            options: vec![
                "Very slowly",
                "Slowly",
                "At average speed",
                "Quickly",
                "Very quickly",
            ],
            weight: 1.5,
            trait_tag: "cognition",
        },
        Question {
            id: "wiscar-ability-1",
            section: Section::Wiscar,
            category: "Ability",
            prompt: "How do you typically respond to feedback about your security implementations?",
            kind: QuestionKind::MultipleChoice,
            options: vec![
                "I prefer not to receive criticism",
                "I accept feedback but don't always act on it",
                "I appreciate feedback and usually incorporate it",
                "I actively seek out feedback to improve my work",
            ],
            weight: 1.7,
            trait_tag: "ability",
        },
        Question {
            id: "wiscar-realworld-1",
            section: Section::Wiscar,
            category: "Real-world Fit",
            prompt: "How comfortable are you with the idea of being on-call for security incidents outside normal business hours?",
            kind: QuestionKind::Likert,
            options: vec![
                "Very uncomfortable",
                "Uncomfortable",
                "Neutral",
                "Comfortable",
                "Very comfortable",
            ],
            weight: 1.3,
            trait_tag: "realWorldFit",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::WiscarTrait;

    fn question(id: &'static str, options: Vec<&'static str>, weight: f64) -> Question {
        Question {
            id,
            section: Section::Technical,
            category: "Test",
            prompt: "prompt",
            kind: QuestionKind::MultipleChoice,
            options,
            weight,
            trait_tag: "logic",
        }
    }

    #[test]
    fn standard_bank_covers_every_section_and_trait() {
        let bank = QuestionBank::standard().expect("standard bank validates");
        assert_eq!(bank.len(), 28);
        assert_eq!(bank.questions_for_section(Section::Psychometric).len(), 11);
        assert_eq!(bank.questions_for_section(Section::Technical).len(), 6);
        assert_eq!(bank.questions_for_section(Section::Domain).len(), 5);

        let wiscar = bank.questions_for_section(Section::Wiscar);
        for trait_kind in WiscarTrait::ordered() {
            assert!(
                wiscar
                    .iter()
                    .any(|question| question.trait_tag == trait_kind.tag()),
                "missing wiscar question for {}",
                trait_kind.label()
            );
        }
    }

    #[test]
    fn lookup_by_id_and_position_agree() {
        let bank = QuestionBank::standard().expect("standard bank validates");
        let index = bank.position("domain-4").expect("domain-4 present");
        assert_eq!(bank.at(index).map(|q| q.id), Some("domain-4"));
        assert_eq!(bank.get("domain-4").map(|q| q.weight), Some(2.2));
        assert!(bank.get("missing").is_none());
    }

    #[test]
    fn rejects_single_option_questions() {
        let err = QuestionBank::new(vec![question("solo", vec!["only"], 1.0)])
            .expect_err("single option rejected");
        assert_eq!(
            err,
            QuestionBankError::TooFewOptions {
                id: "solo".to_string(),
                count: 1
            }
        );
    }

    #[test]
    fn rejects_duplicate_ids_and_bad_weights() {
        let duplicate = QuestionBank::new(vec![
            question("q", vec!["a", "b"], 1.0),
            question("q", vec!["a", "b"], 1.0),
        ]);
        assert!(matches!(duplicate, Err(QuestionBankError::DuplicateId(id)) if id == "q"));

        let zero = QuestionBank::new(vec![question("z", vec!["a", "b"], 0.0)]);
        assert!(matches!(zero, Err(QuestionBankError::InvalidWeight { .. })));

        let nan = QuestionBank::new(vec![question("n", vec!["a", "b"], f64::NAN)]);
        assert!(matches!(nan, Err(QuestionBankError::InvalidWeight { .. })));

        assert_eq!(QuestionBank::new(Vec::new()).err(), Some(QuestionBankError::Empty));
    }

    #[test]
    fn rejects_wiscar_question_without_known_trait() {
        let mut stray = question("w", vec!["a", "b"], 1.0);
        stray.section = Section::Wiscar;
        stray.trait_tag = "grit";
        let err = QuestionBank::new(vec![stray]).expect_err("unknown trait rejected");
        assert!(err.to_string().contains("grit"));
    }
}
