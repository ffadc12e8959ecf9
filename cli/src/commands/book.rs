use clinic_common::config::Config;
use clinic_common::{success, warn};
use clinic_core::registry::Registry;
use clinic_core::seed;

use crate::terminal::{format, print};

pub fn book(doctor_id: u32, name: &str, mobile: &str, time: &str, cfg: &Config) {
    let mut registry: Registry = seed::demo_registry();
    print::header("booking an appointment", cfg.quiet);
    book_into(&mut registry, doctor_id, name, mobile, time);
}

/// Books against an existing registry and reports the outcome.
///
/// Failures leave the registry untouched; the reason is reported and the
/// program carries on.
pub fn book_into(registry: &mut Registry, doctor_id: u32, name: &str, mobile: &str, time: &str) {
    match registry.create_appointment(doctor_id, name, mobile, time) {
        Ok(appointment) => {
            let doctor_name: String = appointment
                .doctor()
                .map_or("N/A", |doctor| doctor.name())
                .to_string();
            let time_slot: String = appointment.time_slot().to_string();

            success!("Appointment successfully created");
            print::print_status(format::booking_summary(name, &doctor_name, &time_slot));
        }
        Err(reason) => warn!("Appointment Failed: {reason}"),
    }
}
