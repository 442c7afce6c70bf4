//! Keyword helper for student questions.
//!
//! Questions are lower-cased and checked against an ordered rule table; the
//! first rule with any matching keyword wins, so a question mentioning both
//! "model" and "growth" gets the formula explanation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Formula,
    Growth,
    Decay,
    Graph,
    Realism,
    Fallback,
}

impl Topic {
    pub fn explanation(&self) -> &'static str {
        match self {
            Topic::Formula => {
                "The equation used is S(t) = S₀(1 + r)ᵗ. S₀ is the initial speed, \
                 r is the rate of change (as a decimal), and t is time in hours."
            }
            Topic::Growth => {
                "Growth happens when the rate is positive, meaning the speed increases \
                 each hour by a percentage."
            }
            Topic::Decay => {
                "Decay happens when the rate is negative, meaning the speed decreases \
                 each hour by a percentage."
            }
            Topic::Graph => {
                "The graph shows how speed changes over time. A curve upward means growth; \
                 a curve downward means decay."
            }
            Topic::Realism => {
                "This model is not realistic for real driving. It is only for learning \
                 how exponential functions work."
            }
            Topic::Fallback => {
                "Good question! Try asking about the equation, growth vs decay, the graph, \
                 or what the numbers mean."
            }
        }
    }
}

struct Rule {
    keywords: &'static [&'static str],
    topic: Topic,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["equation", "model"],
        topic: Topic::Formula,
    },
    Rule {
        keywords: &["growth"],
        topic: Topic::Growth,
    },
    Rule {
        keywords: &["decay"],
        topic: Topic::Decay,
    },
    Rule {
        keywords: &["graph"],
        topic: Topic::Graph,
    },
    Rule {
        keywords: &["real", "safe"],
        topic: Topic::Realism,
    },
];

pub fn classify(question: &str) -> Topic {
    let question = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| question.contains(kw)))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Fallback)
}

pub fn respond(question: &str) -> &'static str {
    classify(question).explanation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_question_is_case_insensitive() {
        assert_eq!(respond("What is the EQUATION?"), Topic::Formula.explanation());
        assert_eq!(respond("What is the equation?"), Topic::Formula.explanation());
    }

    #[test]
    fn decay_question() {
        assert_eq!(respond("tell me about decay"), Topic::Decay.explanation());
    }

    #[test]
    fn unknown_question_falls_back() {
        assert_eq!(respond("banana"), Topic::Fallback.explanation());
        assert_eq!(classify(""), Topic::Fallback);
    }

    #[test]
    fn earlier_rules_win_ties() {
        assert_eq!(classify("does the model show growth?"), Topic::Formula);
        assert_eq!(classify("growth or decay?"), Topic::Growth);
        assert_eq!(classify("graph of decay"), Topic::Decay);
        assert_eq!(classify("is the graph real"), Topic::Graph);
    }

    #[test]
    fn substring_matching_is_literal() {
        assert_eq!(classify("Is this realistic?"), Topic::Realism);
        assert_eq!(classify("Is it SAFE to drive like this"), Topic::Realism);
        assert_eq!(classify("what about the graphs"), Topic::Graph);
    }

    #[test]
    fn explanations_are_distinct() {
        let topics = [
            Topic::Formula,
            Topic::Growth,
            Topic::Decay,
            Topic::Graph,
            Topic::Realism,
            Topic::Fallback,
        ];
        for (i, a) in topics.iter().enumerate() {
            for b in &topics[i + 1..] {
                assert_ne!(a.explanation(), b.explanation());
            }
        }
    }
}
