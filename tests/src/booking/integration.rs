#![cfg(test)]
use clinic_common::clinic::professional::Specialty;
use clinic_common::error::BookingError;
use clinic_core::registry::Registry;
use clinic_core::seed;

/// This test replays the demonstration sequence end to end: one valid
/// booking, one booking against an unknown doctor id, a cancellation, and
/// a second cancellation of the same number.
#[test]
fn demo_scenario_end_to_end() {
    let mut registry: Registry = seed::demo_registry();
    assert_eq!(registry.professionals().len(), 5);

    let result = registry.create_appointment(2, "YuZt", "18466209754", "09:30");
    assert!(result.is_ok(), "Booking failed: {:?}", result.err());
    assert_eq!(registry.appointments().len(), 1);

    let result = registry.create_appointment(99, "X", "1", "10:00");
    assert_eq!(result.unwrap_err(), BookingError::InvalidDoctorId(99));
    assert_eq!(
        registry.appointments().len(),
        1,
        "Failed booking must not grow the appointment book"
    );

    let booked = &registry.appointments()[0];
    assert_eq!(booked.doctor().map(|doctor| doctor.name()), Some("Bob Johnson"));
    assert_eq!(booked.time_slot(), "09:30");

    let result = registry.cancel_booking("18466209754");
    assert!(result.is_ok(), "Cancellation failed: {:?}", result.err());
    assert!(registry.appointments().is_empty());

    let result = registry.cancel_booking("18466209754");
    assert_eq!(
        result.unwrap_err(),
        BookingError::PhoneNumberNotFound("18466209754".to_string())
    );
}

#[test]
fn full_demo_bookings_keep_insertion_order() {
    let mut registry: Registry = seed::demo_registry();

    registry
        .create_appointment(2, "YuZt", "18466209754", "09:30")
        .unwrap();
    registry
        .create_appointment(1, "DengSy", "12356786093", "14:20")
        .unwrap();
    registry
        .create_appointment(4, "LiTz", "16587398765", "16:15")
        .unwrap();
    registry
        .create_appointment(5, "LiuHy", "12409567734", "10:00")
        .unwrap();

    let doctor_ids: Vec<Option<u32>> = registry
        .appointments()
        .iter()
        .map(|appointment| appointment.doctor().map(|doctor| doctor.id()))
        .collect();
    assert_eq!(
        doctor_ids,
        vec![Some(2), Some(1), Some(4), Some(5)],
        "Appointment order must be booking order"
    );

    registry.cancel_booking("18466209754").unwrap();
    assert_eq!(registry.appointments().len(), 3);
    assert_eq!(
        registry.appointments()[0].doctor().map(|doctor| doctor.id()),
        Some(1),
        "Cancellation must remove the earliest matching booking only"
    );
}

#[test]
fn roster_groups_cover_the_whole_seeded_roster() {
    let registry: Registry = seed::demo_registry();

    let gp_count: usize = registry
        .professionals_of(Specialty::GeneralPractitioner)
        .count();
    let cardiologist_count: usize = registry.professionals_of(Specialty::Cardiologist).count();

    assert_eq!(gp_count, 3);
    assert_eq!(cardiologist_count, 2);
    assert_eq!(
        gp_count + cardiologist_count,
        registry.professionals().len(),
        "Every seeded professional belongs to exactly one group"
    );
}

#[test]
fn every_seeded_roster_line_is_fixed_width() {
    let registry: Registry = seed::demo_registry();

    for professional in registry.professionals() {
        let line: String = professional.format_details();
        assert_eq!(
            line.len(),
            81,
            "Roster line for id {} is not fixed-width: {:?}",
            professional.id(),
            line
        );
        assert!(line.ends_with('\n'));
    }
}
