use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use shared_models::AttentionMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityWindow {
    Today,
    Tomorrow,
    Week,
    #[default]
    All,
}

impl AvailabilityWindow {
    /// The single weekday this window pins down, relative to `today`.
    /// `Week` and `All` span several days and map to no specific day.
    pub fn weekday_from(&self, today: NaiveDate) -> Option<Weekday> {
        match self {
            AvailabilityWindow::Today => Some(today.weekday()),
            AvailabilityWindow::Tomorrow => Some(today.weekday().succ()),
            AvailabilityWindow::Week | AvailabilityWindow::All => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttentionFilter {
    Presencial,
    Virtual,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl AttentionFilter {
    pub fn mode(&self) -> Option<AttentionMode> {
        match self {
            AttentionFilter::Presencial => Some(AttentionMode::Presencial),
            AttentionFilter::Virtual => Some(AttentionMode::Virtual),
            AttentionFilter::All => None,
        }
    }
}

impl From<Option<AttentionMode>> for AttentionFilter {
    fn from(mode: Option<AttentionMode>) -> Self {
        match mode {
            Some(AttentionMode::Presencial) => AttentionFilter::Presencial,
            Some(AttentionMode::Virtual) => AttentionFilter::Virtual,
            None => AttentionFilter::All,
        }
    }
}

/// Structured reading of one free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub user_query: String,
    /// Canonical specialty label, empty when nothing was detected.
    pub specialty: String,
    /// Matched district token as written in the gazetteer, empty when none.
    pub location: String,
    pub availability: AvailabilityWindow,
    pub attention_type: AttentionFilter,
    pub interpretation: String,
}

impl ParsedQuery {
    pub fn has_specialty(&self) -> bool {
        !self.specialty.is_empty()
    }

    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }

    /// True when nothing at all was recognised in the input.
    pub fn is_generic(&self) -> bool {
        !self.has_specialty()
            && !self.has_location()
            && self.availability == AvailabilityWindow::All
            && self.attention_type == AttentionFilter::All
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretRequest {
    pub text: String,
}
