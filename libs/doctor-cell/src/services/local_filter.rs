// libs/doctor-cell/src/services/local_filter.rs

use tracing::debug;

use query_cell::models::AvailabilityWindow;
use shared_utils::text::fold;

use crate::models::{Availability, DoctorAggregate, LocalFilters, SearchSnapshot};

/// Narrow an already-fetched result set without asking the collaborator
/// again. Text comparisons ignore case and accents.
pub fn filter_locally(snapshot: &SearchSnapshot, filters: &LocalFilters) -> Vec<DoctorAggregate> {
    let specialty = fold(&filters.specialty);
    let location = fold(&filters.location);
    let attention = filters.attention_type.mode();

    let doctors: Vec<DoctorAggregate> = snapshot
        .doctors
        .iter()
        .filter(|doctor| specialty.is_empty() || fold(&doctor.specialty).contains(&specialty))
        .filter(|doctor| location.is_empty() || located_in(doctor, &location))
        .filter(|doctor| attention.map_or(true, |mode| doctor.offers(mode)))
        .filter(|doctor| within_window(doctor.availability, filters.availability))
        .cloned()
        .collect();

    debug!(
        "Local filter kept {} of {} doctors from '{}'",
        doctors.len(),
        snapshot.doctors.len(),
        snapshot.query
    );
    doctors
}

fn located_in(doctor: &DoctorAggregate, location: &str) -> bool {
    doctor.clinics.iter().any(|clinic| {
        fold(&clinic.district).contains(location)
            || fold(&clinic.address).contains(location)
            || fold(&clinic.clinic_name).contains(location)
    })
}

fn within_window(availability: Availability, window: AvailabilityWindow) -> bool {
    match window {
        AvailabilityWindow::Today => availability == Availability::Available,
        AvailabilityWindow::Tomorrow | AvailabilityWindow::Week => availability != Availability::Unavailable,
        AvailabilityWindow::All => true,
    }
}

/// Holds the results of the most recent semantic search for one user
/// session. Every new search replaces the snapshot outright; there is no
/// ordering guard, so a slow earlier response that lands last wins.
#[derive(Debug, Default)]
pub struct SearchSession {
    snapshot: Option<SearchSnapshot>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_snapshot(&mut self, snapshot: SearchSnapshot) -> Option<SearchSnapshot> {
        self.snapshot.replace(snapshot)
    }

    pub fn snapshot(&self) -> Option<&SearchSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    /// Filters the current snapshot; no snapshot means nothing to show.
    pub fn refilter(&self, filters: &LocalFilters) -> Vec<DoctorAggregate> {
        self.snapshot
            .as_ref()
            .map(|snapshot| filter_locally(snapshot, filters))
            .unwrap_or_default()
    }
}
