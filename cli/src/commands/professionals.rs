use clinic_common::clinic::professional::Specialty;
use clinic_common::config::Config;
use clinic_core::registry::Registry;
use clinic_core::seed;

use crate::{cprint, terminal::{format, print}};

pub fn professionals(cfg: &Config) {
    let registry: Registry = seed::demo_registry();
    print_roster(&registry, cfg);
}

/// Prints the roster grouped by specialty, one fixed-width table per group.
///
/// Grouping follows the specialty discriminant; within a group the rows
/// keep roster insertion order.
pub fn print_roster(registry: &Registry, cfg: &Config) {
    print::header("health professionals", cfg.quiet);

    print_group(registry, Specialty::GeneralPractitioner);
    cprint!();
    print_group(registry, Specialty::Cardiologist);
}

fn print_group(registry: &Registry, specialty: Specialty) {
    print::print(&format::group_title(specialty).to_string());
    print::print(&format::professional_table_header(specialty).to_string());

    for professional in registry.professionals_of(specialty) {
        print::print(professional.format_details().trim_end_matches('\n'));
    }
}
