use crate::terminal::colors;
use clinic_common::clinic::appointment::Appointment;
use clinic_common::clinic::professional::Specialty;
use colored::*;

/// Section title for one roster group.
pub fn group_title(specialty: Specialty) -> ColoredString {
    let title: &str = match specialty {
        Specialty::GeneralPractitioner => "General Practitioners",
        Specialty::Cardiologist => "Cardiologists",
    };
    title.color(colors::PRIMARY).bold()
}

/// Column header matching the fixed-width roster lines of one specialty.
///
/// The leading identity columns are shared; the two trailing headings name
/// the specialty-specific columns.
pub fn professional_table_header(specialty: Specialty) -> ColoredString {
    let (first, second): (&str, &str) = match specialty {
        Specialty::GeneralPractitioner => ("Max Consultation Time", "Bulk Billing Available"),
        Specialty::Cardiologist => ("Subspecialty", "Cath Lab Access"),
    };

    format!(
        "{:<5}{:<15}{:<5}{:<25}{:<25}{:<15}",
        "ID", "Name", "Age", "Profession", first, second
    )
    .color(colors::COLUMN_HEADER)
}

/// One numbered appointment block for the list report.
pub fn appointment_block(number: usize, appointment: &Appointment) -> String {
    format!("Appointment #{number}\n{}", appointment.format_details())
}

/// The one-line confirmation printed after a successful booking.
pub fn booking_summary(patient: &str, doctor: &str, time_slot: &str) -> String {
    let patient: ColoredString = patient.color(colors::PRIMARY);
    let doctor: ColoredString = doctor.color(colors::PRIMARY);
    let time_slot: ColoredString = time_slot.color(colors::ACCENT);
    format!("Patient: {patient}  |  Doctor: {doctor}  |  Time: {time_slot}")
}
