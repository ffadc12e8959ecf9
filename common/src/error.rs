#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("invalid doctor id: {0}")]
    InvalidDoctorId(u32),
    #[error("patient name cannot be empty")]
    EmptyPatientName,
    #[error("phone number cannot be empty")]
    EmptyPhoneNumber,
    #[error("appointment time cannot be empty")]
    EmptyTimeSlot,
    #[error("phone number {0} not found in existing appointments")]
    PhoneNumberNotFound(String),
}

pub type BookingResult<T> = std::result::Result<T, BookingError>;
