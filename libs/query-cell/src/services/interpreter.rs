use tracing::debug;

use shared_models::AttentionMode;
use shared_utils::text::{contains_word, fold, title_case};

use crate::dictionaries::{
    SymptomEntry, DISTRICTS, PRESENCIAL_KEYWORDS, SPECIALTY_KEYWORDS, SYMPTOMS,
    TODAY_KEYWORDS, TOMORROW_KEYWORDS, VIRTUAL_KEYWORDS, WEEK_KEYWORDS,
};
use crate::models::{AttentionFilter, AvailabilityWindow, ParsedQuery};

pub const GENERIC_INTERPRETATION: &str = "Mostrando todos los doctores disponibles";
const INTERPRETATION_PREFIX: &str = "Esta es la lista de";

/// Read a free-text request and derive search filters from it.
///
/// Each category (specialty, availability, attention, location) is detected
/// independently over the same folded text; within a category the first
/// dictionary entry that matches wins. Keywords match as plain substrings,
/// so inflected forms ("urgentemente", "cardiologos") still count. District
/// names are the exception and must appear as whole words. A directly named
/// specialty takes precedence over one inferred from a symptom.
pub fn interpret(text: &str) -> ParsedQuery {
    let normalized = fold(text);

    let direct_specialty = detect_specialty(&normalized);
    let symptom = detect_symptom(&normalized);
    let availability = detect_availability(&normalized);
    let attention = detect_attention(&normalized);
    let location = detect_location(&normalized);

    let mut clauses: Vec<String> = Vec::new();

    let specialty = match (direct_specialty, symptom) {
        (Some(label), _) => {
            clauses.push(format!("{}s", label.to_lowercase()));
            label.to_string()
        }
        (None, Some(entry)) => {
            clauses.push(entry.message.to_string());
            entry.specialty.to_string()
        }
        (None, None) => String::new(),
    };

    if let Some(clause) = availability_clause(availability) {
        clauses.push(clause.to_string());
    }

    if let Some(mode) = attention {
        clauses.push(attention_clause(mode).to_string());
    }

    if let Some(district) = location {
        clauses.push(format!("en {}", title_case(district)));
    }

    let interpretation = if clauses.is_empty() {
        GENERIC_INTERPRETATION.to_string()
    } else {
        format!("{} {}", INTERPRETATION_PREFIX, clauses.join(" "))
    };

    debug!(
        "Interpreted query '{}' as specialty='{}' availability={:?} attention={:?} location={:?}",
        text, specialty, availability, attention, location
    );

    ParsedQuery {
        user_query: text.to_string(),
        specialty,
        location: location.unwrap_or_default().to_string(),
        availability,
        attention_type: AttentionFilter::from(attention),
        interpretation,
    }
}

fn matches_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| normalized.contains(&fold(keyword)))
}

fn detect_specialty(normalized: &str) -> Option<&'static str> {
    SPECIALTY_KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(*keyword))
        .map(|(_, label)| *label)
}

fn detect_symptom(normalized: &str) -> Option<&'static SymptomEntry> {
    SYMPTOMS
        .iter()
        .find(|entry| normalized.contains(&fold(entry.phrase)))
}

fn detect_availability(normalized: &str) -> AvailabilityWindow {
    if matches_any(normalized, TODAY_KEYWORDS) {
        AvailabilityWindow::Today
    } else if matches_any(normalized, TOMORROW_KEYWORDS) {
        AvailabilityWindow::Tomorrow
    } else if matches_any(normalized, WEEK_KEYWORDS) {
        AvailabilityWindow::Week
    } else {
        AvailabilityWindow::All
    }
}

fn detect_attention(normalized: &str) -> Option<AttentionMode> {
    if matches_any(normalized, VIRTUAL_KEYWORDS) {
        Some(AttentionMode::Virtual)
    } else if matches_any(normalized, PRESENCIAL_KEYWORDS) {
        Some(AttentionMode::Presencial)
    } else {
        None
    }
}

fn detect_location(normalized: &str) -> Option<&'static str> {
    DISTRICTS
        .iter()
        .find(|district| contains_word(normalized, district))
        .copied()
}

fn availability_clause(window: AvailabilityWindow) -> Option<&'static str> {
    match window {
        AvailabilityWindow::Today => Some("disponibles para hoy"),
        AvailabilityWindow::Tomorrow => Some("disponibles para mañana"),
        AvailabilityWindow::Week => Some("disponibles esta semana"),
        AvailabilityWindow::All => None,
    }
}

fn attention_clause(mode: AttentionMode) -> &'static str {
    match mode {
        AttentionMode::Virtual => "con atención virtual",
        AttentionMode::Presencial => "con atención presencial",
    }
}
