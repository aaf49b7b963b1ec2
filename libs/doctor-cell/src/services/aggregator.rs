// libs/doctor-cell/src/services/aggregator.rs

use std::collections::HashMap;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveTime;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use shared_utils::text::fold;

use crate::models::{
    Availability, ClinicLocation, DoctorAggregate, DoctorKey, FlatAvailabilityRow,
};

pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/150?text=Doctor";
pub const PLACEHOLDER_SCHEDULE: &str = "Horario por confirmar";
pub const DEFAULT_RATING: f32 = 5.0;
pub const REFERENCE_PRICE: f64 = 150.0;
const SPECIALTY_SEPARATOR: &str = ", ";
const GENERIC_DESCRIPTION: &str = "Médico";

/// Fold flat availability rows into one aggregate per doctor.
///
/// Doctors come out in first-appearance order. Schedules and clinic locations
/// keep first-seen order and are never duplicated. Every aggregate has at
/// least one schedule entry and one location.
pub fn aggregate(rows: &[FlatAvailabilityRow]) -> Vec<DoctorAggregate> {
    let mut doctors: Vec<DoctorAggregate> = Vec::new();
    let mut index_by_key: HashMap<DoctorKey, usize> = HashMap::new();

    for row in rows {
        let key = doctor_key(row);
        let position = *index_by_key.entry(key.clone()).or_insert_with(|| {
            doctors.push(new_aggregate(key, row));
            doctors.len() - 1
        });
        let doctor = &mut doctors[position];

        merge_specialty(doctor, &row.nombre_especialidad);
        merge_schedule(doctor, row);
        merge_clinic(doctor, row);
    }

    for doctor in &mut doctors {
        doctor.availability = classify(&doctor.schedules);
        describe(doctor);
    }

    debug!("Aggregated {} rows into {} doctors", rows.len(), doctors.len());
    doctors
}

/// Identity for a row: the collaborator's numeric id when present, otherwise
/// a stable digest of the folded name and license number.
pub fn doctor_key(row: &FlatAvailabilityRow) -> DoctorKey {
    if let Some(id) = row.medico_id {
        return DoctorKey::Registered(id);
    }

    let license = row.cmp_numero.as_deref().unwrap_or_default().trim();
    if row.nombre_doctor.trim().is_empty() && license.is_empty() {
        warn!("Row without doctor id, name or license; it will share an identity with similar rows");
    }

    let mut hasher = Sha256::new();
    hasher.update(fold(&row.nombre_doctor).as_bytes());
    hasher.update([0u8]);
    hasher.update(license.as_bytes());
    let digest = hasher.finalize();

    DoctorKey::Derived(format!("cmp-{}", URL_SAFE_NO_PAD.encode(&digest[..12])))
}

fn new_aggregate(id: DoctorKey, row: &FlatAvailabilityRow) -> DoctorAggregate {
    let photo = row
        .url_imagen
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_PHOTO)
        .to_string();

    DoctorAggregate {
        id,
        name: row.nombre_doctor.clone(),
        cmp: row.cmp_numero.clone().unwrap_or_default(),
        verified: row.validado_cmp,
        photo,
        rating: row.calificacion.filter(|r| *r > 0.0).unwrap_or(DEFAULT_RATING),
        specialty: String::new(),
        schedules: Vec::new(),
        clinics: Vec::new(),
        bio: String::new(),
        description: String::new(),
        languages: vec!["Español".to_string(), "Inglés".to_string()],
        price: None,
        availability: Availability::default(),
    }
}

/// Appends `specialty` unless it already occurs as a substring of the label.
/// Containment is textual: a name that is part of an earlier, longer name is
/// treated as present.
fn merge_specialty(doctor: &mut DoctorAggregate, specialty: &str) {
    let specialty = specialty.trim();
    if specialty.is_empty() || doctor.specialty.contains(specialty) {
        return;
    }

    if doctor.specialty.is_empty() {
        doctor.specialty = specialty.to_string();
    } else {
        doctor.specialty.push_str(SPECIALTY_SEPARATOR);
        doctor.specialty.push_str(specialty);
    }
}

fn merge_schedule(doctor: &mut DoctorAggregate, row: &FlatAvailabilityRow) {
    match format_schedule(row) {
        Some(schedule) => {
            if !doctor.schedules.contains(&schedule) {
                doctor.schedules.push(schedule);
            }
        }
        None if doctor.schedules.is_empty() => {
            doctor.schedules.push(PLACEHOLDER_SCHEDULE.to_string());
        }
        None => {}
    }
}

fn merge_clinic(doctor: &mut DoctorAggregate, row: &FlatAvailabilityRow) {
    let branch = fold(&row.nombre_sede);
    let attention = fold(&row.tipo_atencion);

    let exists = doctor.clinics.iter().any(|clinic| {
        clinic.id == row.clinica_id
            && fold(&clinic.branch) == branch
            && fold(&clinic.attention_type) == attention
    });
    if exists {
        return;
    }

    let clinic = ClinicLocation {
        id: row.clinica_id,
        clinic_name: row.nombre_clinica.clone(),
        branch: row.nombre_sede.clone(),
        district: row.distrito.clone(),
        address: address_for(row),
        attention_type: row.tipo_atencion.clone(),
        logo_url: row.url_logo.clone().filter(|url| !url.trim().is_empty()),
        next_available: next_available(row),
        price: Some(REFERENCE_PRICE),
        booking_url: row.url_reserva.clone().filter(|url| !url.trim().is_empty()),
    };

    if doctor.price.is_none() {
        doctor.price = clinic.price;
    }
    doctor.clinics.push(clinic);
}

fn address_for(row: &FlatAvailabilityRow) -> String {
    if let Some(address) = row.direccion.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        return address.to_string();
    }

    [row.nombre_sede.trim(), row.distrito.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "<Day> <HH:MM> - <HH:MM>", or `None` when the row has no usable slot.
pub fn format_schedule(row: &FlatAvailabilityRow) -> Option<String> {
    let day = non_blank(&row.dia)?;
    let start = short_time(non_blank(&row.hora_inicio)?);
    let end = short_time(non_blank(&row.hora_fin)?);
    Some(format!("{} {} - {}", day, start, end))
}

fn next_available(row: &FlatAvailabilityRow) -> Option<String> {
    let day = non_blank(&row.dia)?;
    let start = short_time(non_blank(&row.hora_inicio)?);
    Some(format!("{} {}", day, start))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `HH:MM:SS` → `HH:MM`. Values that are not clock times are cut to five
/// characters as-is.
pub fn short_time(value: &str) -> String {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| value.chars().take(5).collect())
}

/// Biography and short description from the merged specialty label. A doctor
/// with no specialty on any row gets the generic wording.
fn describe(doctor: &mut DoctorAggregate) {
    if doctor.specialty.is_empty() {
        doctor.bio = format!(
            "El Dr. {} está comprometido con la salud de sus pacientes.",
            doctor.name
        );
        doctor.description = GENERIC_DESCRIPTION.to_string();
    } else {
        doctor.bio = format!(
            "El Dr. {} es especialista en {}, comprometido con la salud de sus pacientes.",
            doctor.name, doctor.specialty
        );
        doctor.description = format!("Especialista en {}", doctor.specialty);
    }
}

fn classify(schedules: &[String]) -> Availability {
    if schedules.iter().any(|schedule| schedule != PLACEHOLDER_SCHEDULE) {
        Availability::Available
    } else {
        Availability::Limited
    }
}
