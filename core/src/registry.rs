//! # Clinic Registry
//!
//! The single owner of all clinic state.
//!
//! The registry holds the professional roster and the appointment book and
//! exposes the four operations of the demonstrator: list professionals,
//! create an appointment, list appointments, cancel a booking. Drivers
//! construct one registry and route every operation through it; there is no
//! process-global state, so each test gets its own isolated instance.

use std::sync::Arc;

use clinic_common::clinic::appointment::Appointment;
use clinic_common::clinic::patient::Patient;
use clinic_common::clinic::professional::{HealthProfessional, Specialty};
use clinic_common::error::{BookingError, BookingResult};
use tracing::debug;

/// Owns the professional roster and the appointment book.
///
/// Mutating operations take `&mut self`; exclusive access is enforced by the
/// borrow checker rather than a lock. A driver serving one registry from
/// several threads must wrap it in a single exclusive lock per instance.
#[derive(Debug, Default)]
pub struct Registry {
    professionals: Vec<Arc<dyn HealthProfessional>>,
    appointments: Vec<Appointment>,
}

impl Registry {
    /// An empty registry with no roster and no bookings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a professional to the roster.
    ///
    /// Roster order is listing order. Id uniqueness is the caller's
    /// convention and is not enforced here. There is no update or removal;
    /// the roster is fixed once seeding is done.
    pub fn add_professional(&mut self, professional: Arc<dyn HealthProfessional>) {
        self.professionals.push(professional);
    }

    /// The full roster in insertion order.
    pub fn professionals(&self) -> &[Arc<dyn HealthProfessional>] {
        &self.professionals
    }

    /// Roster entries of one specialty, in insertion order.
    pub fn professionals_of(
        &self,
        specialty: Specialty,
    ) -> impl Iterator<Item = &dyn HealthProfessional> {
        self.professionals
            .iter()
            .filter(move |professional| professional.specialty() == specialty)
            .map(|professional| professional.as_ref())
    }

    /// Every booking in the order it was made.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Books an appointment with the professional whose id matches.
    ///
    /// The lookup is a linear scan taking the first id match in roster
    /// order. Name, mobile and slot must be non-blank; the stored values
    /// are the raw, untrimmed inputs. Double-booking the same professional
    /// and slot is not checked.
    ///
    /// On success the stored booking is returned; on failure the registry
    /// is left untouched.
    pub fn create_appointment(
        &mut self,
        doctor_id: u32,
        patient_name: &str,
        patient_mobile: &str,
        time_slot: &str,
    ) -> BookingResult<&Appointment> {
        let doctor: Arc<dyn HealthProfessional> = self
            .professionals
            .iter()
            .find(|professional| professional.id() == doctor_id)
            .map(Arc::clone)
            .ok_or(BookingError::InvalidDoctorId(doctor_id))?;

        if patient_name.trim().is_empty() {
            return Err(BookingError::EmptyPatientName);
        }
        if patient_mobile.trim().is_empty() {
            return Err(BookingError::EmptyPhoneNumber);
        }
        if time_slot.trim().is_empty() {
            return Err(BookingError::EmptyTimeSlot);
        }

        let patient = Patient::new(patient_name, patient_mobile);
        self.appointments
            .push(Appointment::new(patient, time_slot, doctor));
        debug!(doctor_id, time_slot, "booking appended");

        Ok(&self.appointments[self.appointments.len() - 1])
    }

    /// Cancels the earliest booking whose patient mobile number matches.
    ///
    /// Comparison is exact: case-sensitive, untrimmed, against the stored
    /// value. Removal is by index, so later bookings keep their relative
    /// order and only the first match is taken.
    pub fn cancel_booking(&mut self, mobile: &str) -> BookingResult<()> {
        if mobile.trim().is_empty() {
            return Err(BookingError::EmptyPhoneNumber);
        }

        let position: Option<usize> = self
            .appointments
            .iter()
            .position(|appointment| appointment.patient_mobile() == Some(mobile));

        match position {
            Some(index) => {
                self.appointments.remove(index);
                debug!(mobile, "booking cancelled");
                Ok(())
            }
            None => Err(BookingError::PhoneNumberNotFound(mobile.to_string())),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
