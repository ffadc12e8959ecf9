//! Demonstration roster data.
//!
//! The five professionals every demonstration run starts from.

use std::sync::Arc;

use clinic_common::clinic::professional::{
    Cardiologist, GeneralPractitioner, HealthProfessional,
};

use crate::registry::Registry;

/// The fixed demonstration roster, in listing order.
pub fn demo_roster() -> Vec<Arc<dyn HealthProfessional>> {
    let roster: Vec<Arc<dyn HealthProfessional>> = vec![
        Arc::new(GeneralPractitioner::new(
            1,
            "Alice Smith",
            35,
            "General Practitioner",
            15,
            true,
        )),
        Arc::new(GeneralPractitioner::new(
            2,
            "Bob Johnson",
            47,
            "General Practitioner",
            20,
            false,
        )),
        Arc::new(GeneralPractitioner::new(
            3,
            "Clara Lee",
            25,
            "General Practitioner",
            15,
            true,
        )),
        Arc::new(Cardiologist::new(
            4,
            "Carol Dan",
            30,
            "Cardiologist",
            "Electrophysiology",
            true,
        )),
        Arc::new(Cardiologist::new(
            5,
            "Peter Quill",
            55,
            "Cardiologist",
            "Vascular Medicine",
            true,
        )),
    ];
    roster
}

/// A registry pre-seeded with [`demo_roster`].
pub fn demo_registry() -> Registry {
    let mut registry = Registry::new();
    for professional in demo_roster() {
        registry.add_professional(professional);
    }
    registry
}
