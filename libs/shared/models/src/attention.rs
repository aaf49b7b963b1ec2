use std::fmt;

use serde::{Deserialize, Serialize};

/// How a consultation is delivered. The collaborator spells these capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttentionMode {
    Presencial,
    Virtual,
}

impl AttentionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttentionMode::Presencial => "Presencial",
            AttentionMode::Virtual => "Virtual",
        }
    }

    /// Lenient parse used for row values and filter forms. Anything that is
    /// not clearly one of the two modes ("ambos", "all", "none", "") is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "presencial" => Some(AttentionMode::Presencial),
            "virtual" => Some(AttentionMode::Virtual),
            _ => None,
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for AttentionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
