/// A patient attached to a booking.
///
/// Stored exactly as supplied: no trimming, no phone-format checks. The
/// mobile number doubles as the cancellation lookup key and is compared by
/// exact string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    name: String,
    mobile: String,
}

impl Patient {
    pub fn new(name: &str, mobile: &str) -> Self {
        Self {
            name: name.to_string(),
            mobile: mobile.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_inputs_verbatim() {
        let patient = Patient::new(" YuZt ", " 18466209754");
        assert_eq!(patient.name(), " YuZt ");
        assert_eq!(patient.mobile(), " 18466209754");
    }
}
