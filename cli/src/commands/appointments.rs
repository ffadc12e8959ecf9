use clinic_common::config::Config;
use clinic_core::registry::Registry;
use clinic_core::seed;

use crate::terminal::{format, print};

pub fn appointments(cfg: &Config) {
    let registry: Registry = seed::demo_registry();
    print_appointments(&registry, cfg);
}

/// Prints every booking as a numbered block, earliest first.
pub fn print_appointments(registry: &Registry, cfg: &Config) {
    let appointments = registry.appointments();

    if appointments.is_empty() {
        print::header("no appointments", cfg.quiet);
        return;
    }

    let total: usize = appointments.len();
    print::header(&format!("appointment list ({total} total)"), cfg.quiet);

    for (index, appointment) in appointments.iter().enumerate() {
        print::print(&format::appointment_block(index + 1, appointment));
        print::divider();
    }
}
