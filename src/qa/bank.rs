//! Canned answer bank — ordered keyword rules over a fixed set of answers.
//!
//! Matching is first-match-wins over the rule list; a question no rule
//! claims falls back to a uniformly random entry, so the demo always has
//! something to say.

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BankError;

use super::model::SourceRef;

/// A pre-authored answer with its citation stubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Display text.
    pub content: String,
    /// Provenance tags copied verbatim into the emitted assistant message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}

impl Answer {
    pub fn new(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self {
            content: content.into(),
            sources,
        }
    }
}

/// A single keyword rule with a compiled regex.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// Human-readable pattern description.
    pub pattern: String,
    /// Compiled regex for matching.
    regex: Regex,
    /// Index of the answer this rule selects.
    pub answer: usize,
}

/// Fixed answers plus the ordered rules that select among them.
#[derive(Debug, Clone)]
pub struct AnswerBank {
    answers: Vec<Answer>,
    rules: Vec<KeywordRule>,
}

impl AnswerBank {
    /// Create a bank over the given answers. The bank must not be empty;
    /// rules are added afterwards with [`add_rule`](Self::add_rule).
    pub fn new(answers: Vec<Answer>) -> Result<Self, BankError> {
        if answers.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self {
            answers,
            rules: Vec::new(),
        })
    }

    /// Append a keyword rule. Rules are evaluated in insertion order,
    /// first match wins. Patterns are matched case-insensitively.
    pub fn add_rule(&mut self, pattern: &str, answer: usize) -> Result<(), BankError> {
        if answer >= self.answers.len() {
            return Err(BankError::AnswerOutOfRange {
                pattern: pattern.into(),
                index: answer,
                len: self.answers.len(),
            });
        }
        let regex = Regex::new(&format!("(?i){pattern}")).map_err(|source| BankError::Pattern {
            pattern: pattern.into(),
            source,
        })?;
        self.rules.push(KeywordRule {
            pattern: pattern.into(),
            regex,
            answer,
        });
        Ok(())
    }

    /// Select the answer for a question.
    ///
    /// Runs the ordered rules; if none matches, picks uniformly at random
    /// among all entries using the supplied RNG.
    pub fn select(&self, question: &str, rng: &mut impl Rng) -> &Answer {
        for rule in &self.rules {
            if rule.regex.is_match(question) {
                debug!(
                    pattern = %rule.pattern,
                    index = rule.answer,
                    "Question matched keyword rule"
                );
                return &self.answers[rule.answer];
            }
        }

        let index = rng.gen_range(0..self.answers.len());
        debug!(index, "No rule matched, falling back to a random answer");
        &self.answers[index]
    }

    /// The fixed answers, in bank order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// The ordered rules.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

/// The demo answer bank for the IT Modernization RFP.
pub fn default_bank() -> AnswerBank {
    let answers = vec![
        Answer::new(
            "According to the RFP, the key technical requirements include:\n\n\
             1. Cloud-native architecture using AWS or Azure\n\
             2. Microservices-based approach\n\
             3. Zero-trust security model implementation\n\
             4. API-first design methodology\n\
             5. Automated CI/CD pipeline\n\n\
             These requirements are detailed in Section 5.2 of the RFP document.",
            vec![
                SourceRef::new(
                    "Technical Requirements",
                    14,
                    "The solution must leverage cloud-native architectures on either AWS or \
                     Azure platforms, implement a microservices approach, and adhere to \
                     zero-trust security principles.",
                ),
                SourceRef::new(
                    "Technical Approach",
                    15,
                    "Vendors must demonstrate experience with API-first design and automated \
                     CI/CD pipelines for continuous delivery.",
                ),
            ],
        ),
        Answer::new(
            "The evaluation criteria for this RFP is based on a 100-point scale with the \
             following breakdown:\n\n\
             - Technical Approach: 40 points\n\
             - Past Performance: 25 points\n\
             - Management Approach: 20 points\n\
             - Price: 15 points\n\n\
             Proposals scoring below 70 points in the technical evaluation will not be \
             considered for award.",
            vec![SourceRef::new(
                "Evaluation Criteria",
                23,
                "Proposals will be evaluated using a 100-point scale with Technical Approach \
                 (40%), Past Performance (25%), Management Approach (20%), and Price (15%).",
            )],
        ),
        Answer::new(
            "The RFP submissions are due on May 15, 2025 by 5:00 PM Eastern Time. All \
             submissions must be made electronically through the procurement portal. Late \
             submissions will not be accepted under any circumstances.",
            vec![SourceRef::new(
                "Submission Instructions",
                3,
                "Proposal submissions are due no later than 5:00 PM ET on May 15, 2025. All \
                 submissions must be made through the electronic procurement portal.",
            )],
        ),
        Answer::new(
            "The required certifications for this RFP include:\n\n\
             1. ISO 27001 (Information Security Management)\n\
             2. CMMI Level 3 or higher\n\
             3. Cloud platform certifications (AWS Certified Solutions Architect or Azure \
             Solutions Architect)\n\
             4. PMP certification for the Project Manager\n\
             5. CISSP certification for the Security Lead\n\n\
             The certifications must be current and valid at the time of proposal submission.",
            vec![SourceRef::new(
                "Qualification Requirements",
                8,
                "Vendors must possess ISO 27001 certification and CMMI Level 3 or higher. Key \
                 personnel must hold relevant cloud platform certifications, with PMP required \
                 for Project Manager and CISSP for Security Lead.",
            )],
        ),
        Answer::new(
            "According to the RFP timeline, the project is expected to be completed within 12 \
             months from the contract award date. This includes:\n\n\
             - Planning Phase: 2 months\n\
             - Design Phase: 2 months\n\
             - Development Phase: 5 months\n\
             - Testing Phase: 2 months\n\
             - Deployment Phase: 1 month\n\n\
             The contract may include options for maintenance and support for up to 3 \
             additional years.",
            vec![
                SourceRef::new(
                    "Project Timeline",
                    12,
                    "The project timeline spans 12 months with distinct phases: Planning (2mo), \
                     Design (2mo), Development (5mo), Testing (2mo), and Deployment (1mo).",
                ),
                SourceRef::new(
                    "Contract Terms",
                    35,
                    "The base contract period is 12 months with options for 3 additional years \
                     of maintenance and support.",
                ),
            ],
        ),
    ];

    let mut bank = AnswerBank::new(answers).unwrap();
    bank.add_rule("technical requirement", 0).unwrap();
    bank.add_rule("evaluation criteria", 1).unwrap();
    bank.add_rule("due|deadline", 2).unwrap();
    bank.add_rule("certification", 3).unwrap();
    bank.add_rule("timeline", 4).unwrap();
    bank
}

/// A suggested question surfaced to callers before the first exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSuggestion {
    pub id: String,
    pub text: String,
}

/// Example questions the demo surfaces alongside the empty transcript.
pub fn suggested_questions() -> Vec<QuestionSuggestion> {
    [
        "What are the key technical requirements?",
        "What is the evaluation criteria for this RFP?",
        "When are proposal submissions due?",
        "What certifications are required for this RFP?",
        "What is the expected timeline for project completion?",
    ]
    .iter()
    .enumerate()
    .map(|(n, text)| QuestionSuggestion {
        id: format!("q{}", n + 1),
        text: (*text).to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn each_rule_selects_its_answer() {
        let bank = default_bank();
        let mut rng = rng();

        let cases = [
            ("What are the key technical requirements?", 0),
            ("What is the evaluation criteria for this RFP?", 1),
            ("When are proposal submissions due?", 2),
            ("Is there a deadline?", 2),
            ("What certifications are required for this RFP?", 3),
            ("What is the expected timeline for project completion?", 4),
        ];
        for (question, index) in cases {
            let answer = bank.select(question, &mut rng);
            assert_eq!(answer, &bank.answers()[index], "question: {question}");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let bank = default_bank();
        let answer = bank.select("TELL ME ABOUT THE CERTIFICATION NEEDS", &mut rng());
        assert_eq!(answer, &bank.answers()[3]);
    }

    #[test]
    fn first_match_wins() {
        let bank = default_bank();
        // Mentions both the deadline (rule 3) and certifications (rule 4);
        // the earlier rule claims it.
        let answer = bank.select(
            "Is the certification paperwork due before the deadline?",
            &mut rng(),
        );
        assert_eq!(answer, &bank.answers()[2]);
    }

    #[test]
    fn fallback_is_deterministic_with_a_seeded_rng() {
        let bank = default_bank();
        let first = bank.select("Tell me a joke", &mut rng()).clone();
        let second = bank.select("Tell me a joke", &mut rng()).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn fallback_always_lands_in_the_bank() {
        let bank = default_bank();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let answer = bank.select("Tell me a joke", &mut rng);
            assert!(bank.answers().contains(answer));
        }
    }

    #[test]
    fn empty_bank_rejected() {
        let err = AnswerBank::new(Vec::new()).unwrap_err();
        assert!(matches!(err, BankError::Empty));
    }

    #[test]
    fn rule_index_out_of_range_rejected() {
        let mut bank = AnswerBank::new(vec![Answer::new("only", Vec::new())]).unwrap();
        let err = bank.add_rule("anything", 5).unwrap_err();
        assert!(matches!(
            err,
            BankError::AnswerOutOfRange { index: 5, len: 1, .. }
        ));
    }

    #[test]
    fn bad_pattern_rejected() {
        let mut bank = AnswerBank::new(vec![Answer::new("only", Vec::new())]).unwrap();
        let err = bank.add_rule("(unclosed", 0).unwrap_err();
        assert!(matches!(err, BankError::Pattern { .. }));
    }

    #[test]
    fn default_bank_shape() {
        let bank = default_bank();
        assert_eq!(bank.answers().len(), 5);
        assert_eq!(bank.rules().len(), 5);
        // Every answer carries at least one citation stub.
        assert!(bank.answers().iter().all(|a| !a.sources.is_empty()));
    }

    #[test]
    fn five_suggested_questions() {
        let suggestions = suggested_questions();
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].id, "q1");
        assert!(suggestions[3].text.contains("certifications"));
    }
}
