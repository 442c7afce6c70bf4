use serde::{Deserialize, Serialize};

/// Evaluates `S(t) = s0 * (1 + r)^t`.
///
/// The slider domain keeps `r` in `[-0.20, 0.20]`, so the base stays positive and
/// fractional exponents are always defined.
pub fn evaluate(t: f64, s0: f64, r: f64) -> f64 {
    s0 * (1.0 + r).powf(t)
}

/// Qualitative reading of the rate's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    Growth,
    Decay,
    Constant,
}

impl Interpretation {
    pub fn from_rate(rate: f64) -> Self {
        if rate > 0.0 {
            Interpretation::Growth
        } else if rate < 0.0 {
            Interpretation::Decay
        } else {
            Interpretation::Constant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Growth => "growth",
            Interpretation::Decay => "decay",
            Interpretation::Constant => "constant",
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            Interpretation::Growth => "The speed increases over time (exponential growth).",
            Interpretation::Decay => "The speed decreases over time (exponential decay).",
            Interpretation::Constant => "The speed remains constant.",
        }
    }
}
