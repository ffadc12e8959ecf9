//! # Appointment Model
//!
//! A booking aggregates one patient with one professional from the roster.
//! The professional is shared, not owned: the registry keeps the roster
//! alive and every booking holds a counted reference into it.

use std::sync::Arc;

use crate::clinic::patient::Patient;
use crate::clinic::professional::HealthProfessional;

/// Placeholder rendered for fields with no value attached.
const MISSING_FIELD: &str = "N/A";

#[derive(Debug, Clone)]
pub struct Appointment {
    patient: Option<Patient>,
    time_slot: String,
    doctor: Option<Arc<dyn HealthProfessional>>,
}

impl Appointment {
    pub fn new(patient: Patient, time_slot: &str, doctor: Arc<dyn HealthProfessional>) -> Self {
        Self {
            patient: Some(patient),
            time_slot: time_slot.to_string(),
            doctor: Some(doctor),
        }
    }

    pub fn patient(&self) -> Option<&Patient> {
        self.patient.as_ref()
    }

    pub fn time_slot(&self) -> &str {
        &self.time_slot
    }

    pub fn doctor(&self) -> Option<&dyn HealthProfessional> {
        self.doctor.as_deref()
    }

    /// Mobile number of the attached patient, if any.
    ///
    /// A patientless booking has no cancellation key and never matches a
    /// phone-number search.
    pub fn patient_mobile(&self) -> Option<&str> {
        self.patient.as_ref().map(Patient::mobile)
    }

    /// Renders the multi-line detail report for this booking.
    ///
    /// The doctor type line is resolved through the specialty discriminant,
    /// never a stored label.
    pub fn format_details(&self) -> String {
        let patient_name: &str = self.patient.as_ref().map_or(MISSING_FIELD, Patient::name);
        let patient_mobile: &str = self.patient_mobile().unwrap_or(MISSING_FIELD);
        let doctor_name: &str = self
            .doctor
            .as_deref()
            .map_or(MISSING_FIELD, |doctor| doctor.name());
        let doctor_type: &str = self
            .doctor
            .as_deref()
            .map_or(MISSING_FIELD, |doctor| doctor.specialty().label());

        format!(
            "Patient Name: {patient_name}\n\
             Patient Phone Number: {patient_mobile}\n\
             Appointment Time: {time_slot}\n\
             Doctor Name: {doctor_name}\n\
             Doctor Type: {doctor_type}\n",
            time_slot = self.time_slot,
        )
    }
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            patient: None,
            time_slot: String::from("00:00"),
            doctor: None,
        }
    }
}
