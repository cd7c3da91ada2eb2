// src/render/confidence.rs
//! Confidence score bands. Every lower bound is inclusive.

use super::theme::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    Excellent,
    Great,
    Good,
    Possible,
    Explore,
}

impl ConfidenceBand {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => ConfidenceBand::Excellent,
            s if s >= 70 => ConfidenceBand::Great,
            s if s >= 60 => ConfidenceBand::Good,
            s if s >= 50 => ConfidenceBand::Possible,
            _ => ConfidenceBand::Explore,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceBand::Excellent => "Excellent Match",
            ConfidenceBand::Great => "Great Match",
            ConfidenceBand::Good => "Good Match",
            ConfidenceBand::Possible => "Possible Match",
            ConfidenceBand::Explore => "Explore",
        }
    }
}

/// Severity used to colour the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceClass {
    High,
    Medium,
    Low,
}

impl ConfidenceClass {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 70 => ConfidenceClass::High,
            s if s >= 50 => ConfidenceClass::Medium,
            _ => ConfidenceClass::Low,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfidenceClass::High => "confidence-high",
            ConfidenceClass::Medium => "confidence-medium",
            ConfidenceClass::Low => "confidence-low",
        }
    }

    pub fn style(self) -> Style {
        match self {
            ConfidenceClass::High => Style::High,
            ConfidenceClass::Medium => Style::Medium,
            ConfidenceClass::Low => Style::Low,
        }
    }
}

pub fn confidence_label(score: i32) -> &'static str {
    ConfidenceBand::from_score(score).label()
}

pub fn confidence_class(score: i32) -> ConfidenceClass {
    ConfidenceClass::from_score(score)
}

/// Badge text, e.g. `87% • Excellent Match`.
pub fn badge_text(score: i32) -> String {
    format!("{}% • {}", score, confidence_label(score))
}
