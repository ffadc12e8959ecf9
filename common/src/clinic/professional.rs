//! # Health Professional Model
//!
//! Roster entries of the clinic.
//!
//! Every professional carries the same base identity columns plus the fields
//! of exactly one specialty, fixed at construction. The [`Specialty`]
//! discriminant replaces downcast-style type checks: grouping and report
//! labels are resolved by matching on it, and a future variant extends the
//! enum with every `match` checked by the compiler.

use std::fmt;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 15;
const AGE_WIDTH: usize = 5;
const PROFESSION_WIDTH: usize = 25;
/// Width of the first specialty-specific column.
const VARIANT_WIDTH: usize = 25;
/// Width of the trailing "Yes"/"No" column.
const FLAG_WIDTH: usize = 5;

/// The professional variants known to the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialty {
    GeneralPractitioner,
    Cardiologist,
}

impl Specialty {
    /// Human-readable label used in appointment reports.
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::GeneralPractitioner => "General Practitioner",
            Specialty::Cardiologist => "Cardiologist",
        }
    }
}

/// Common surface of every roster entry.
///
/// Implementors store their constructor arguments verbatim and expose them
/// through read accessors only; there are no setters. The shared identity
/// columns are rendered by [`format_base_details`] so both variants produce
/// the same leading layout.
pub trait HealthProfessional: fmt::Debug + Send + Sync {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
    fn age(&self) -> u32;
    fn profession(&self) -> &str;
    /// The variant discriminant, used for grouping and report labels.
    fn specialty(&self) -> Specialty;
    /// Renders the full fixed-width roster line, terminated with a newline.
    fn format_details(&self) -> String;
}

/// Formats the identity columns shared by every roster line.
pub fn format_base_details(professional: &dyn HealthProfessional) -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<AGE_WIDTH$}{:<PROFESSION_WIDTH$}",
        professional.id(),
        professional.name(),
        professional.age(),
        professional.profession(),
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// A general practitioner roster entry.
#[derive(Debug, Clone)]
pub struct GeneralPractitioner {
    id: u32,
    name: String,
    age: u32,
    profession: String,
    /// Longest consultation offered, in minutes.
    max_consultation_time: u32,
    bulk_billing: bool,
}

impl GeneralPractitioner {
    pub fn new(
        id: u32,
        name: &str,
        age: u32,
        profession: &str,
        max_consultation_time: u32,
        bulk_billing: bool,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            profession: profession.to_string(),
            max_consultation_time,
            bulk_billing,
        }
    }

    pub fn max_consultation_time(&self) -> u32 {
        self.max_consultation_time
    }

    pub fn bulk_billing(&self) -> bool {
        self.bulk_billing
    }
}

impl Default for GeneralPractitioner {
    fn default() -> Self {
        Self::new(0, "Unknown", 0, "Unknown", 0, true)
    }
}

impl HealthProfessional for GeneralPractitioner {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn profession(&self) -> &str {
        &self.profession
    }

    fn specialty(&self) -> Specialty {
        Specialty::GeneralPractitioner
    }

    fn format_details(&self) -> String {
        let mut line: String = format_base_details(self);
        line.push_str(&format!(
            "{:<VARIANT_WIDTH$}{:<FLAG_WIDTH$}\n",
            self.max_consultation_time,
            yes_no(self.bulk_billing),
        ));
        line
    }
}

/// A cardiologist roster entry.
#[derive(Debug, Clone)]
pub struct Cardiologist {
    id: u32,
    name: String,
    age: u32,
    profession: String,
    subspecialty: String,
    has_cath_lab_access: bool,
}

impl Cardiologist {
    pub fn new(
        id: u32,
        name: &str,
        age: u32,
        profession: &str,
        subspecialty: &str,
        has_cath_lab_access: bool,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            profession: profession.to_string(),
            subspecialty: subspecialty.to_string(),
            has_cath_lab_access,
        }
    }

    pub fn subspecialty(&self) -> &str {
        &self.subspecialty
    }

    pub fn has_cath_lab_access(&self) -> bool {
        self.has_cath_lab_access
    }
}

impl Default for Cardiologist {
    fn default() -> Self {
        Self::new(0, "Unknown", 0, "Unknown", "Unknown", true)
    }
}

impl HealthProfessional for Cardiologist {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn profession(&self) -> &str {
        &self.profession
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiologist
    }

    fn format_details(&self) -> String {
        let mut line: String = format_base_details(self);
        line.push_str(&format!(
            "{:<VARIANT_WIDTH$}{:<FLAG_WIDTH$}\n",
            self.subspecialty,
            yes_no(self.has_cath_lab_access),
        ));
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialty_labels() {
        assert_eq!(Specialty::GeneralPractitioner.label(), "General Practitioner");
        assert_eq!(Specialty::Cardiologist.label(), "Cardiologist");
    }

    #[test]
    fn defaults_use_placeholder_values() {
        let gp = GeneralPractitioner::default();
        assert_eq!(gp.id(), 0);
        assert_eq!(gp.name(), "Unknown");
        assert_eq!(gp.age(), 0);
        assert_eq!(gp.profession(), "Unknown");
        assert_eq!(gp.max_consultation_time(), 0);
        assert!(gp.bulk_billing());

        let cardiologist = Cardiologist::default();
        assert_eq!(cardiologist.id(), 0);
        assert_eq!(cardiologist.subspecialty(), "Unknown");
        assert!(cardiologist.has_cath_lab_access());
    }

    #[test]
    fn gp_line_has_fixed_width_columns() {
        let gp = GeneralPractitioner::new(1, "Alice Smith", 35, "General Practitioner", 15, true);
        let line: String = gp.format_details();

        // Column boundaries: 5 + 15 + 5 + 25 + 25 + 5 = 80 chars plus the
        // terminator.
        assert_eq!(line.len(), 81);
        assert_eq!(&line[0..5], "1    ");
        assert_eq!(&line[5..20], "Alice Smith    ");
        assert_eq!(&line[20..25], "35   ");
        assert_eq!(&line[25..50], "General Practitioner     ");
        assert_eq!(&line[50..75], "15                       ");
        assert_eq!(&line[75..80], "Yes  ");
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn cardiologist_line_has_fixed_width_columns() {
        let cardiologist =
            Cardiologist::new(4, "Carol Dan", 30, "Cardiologist", "Electrophysiology", false);
        let line: String = cardiologist.format_details();

        assert_eq!(line.len(), 81);
        assert_eq!(&line[0..5], "4    ");
        assert_eq!(&line[5..20], "Carol Dan      ");
        assert_eq!(&line[20..25], "30   ");
        assert_eq!(&line[25..50], "Cardiologist             ");
        assert_eq!(&line[50..75], "Electrophysiology        ");
        assert_eq!(&line[75..80], "No   ");
    }

    #[test]
    fn fields_are_stored_verbatim() {
        // No trimming happens at construction.
        let gp = GeneralPractitioner::new(7, "  Padded Name  ", 40, " GP ", 10, false);
        assert_eq!(gp.name(), "  Padded Name  ");
        assert_eq!(gp.profession(), " GP ");
        assert!(!gp.bulk_billing());
    }
}
