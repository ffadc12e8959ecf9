use clinic_common::config::Config;
use clinic_common::info;
use clinic_core::registry::Registry;
use clinic_core::seed;

use crate::commands::{appointments, book, cancel, professionals};
use crate::terminal::print;

/// Replays the canonical demonstration sequence against one registry:
/// the roster report, four bookings, the appointment list, one
/// cancellation by phone number, and the list again.
pub fn demo(cfg: &Config) {
    let mut registry: Registry = seed::demo_registry();
    info!("Seeded {} professionals", registry.professionals().len());

    professionals::print_roster(&registry, cfg);

    print::header("booking appointments", cfg.quiet);
    book::book_into(&mut registry, 2, "YuZt", "18466209754", "09:30");
    book::book_into(&mut registry, 1, "DengSy", "12356786093", "14:20");
    book::book_into(&mut registry, 4, "LiTz", "16587398765", "16:15");
    book::book_into(&mut registry, 5, "LiuHy", "12409567734", "10:00");

    appointments::print_appointments(&registry, cfg);

    print::header("cancelling a booking", cfg.quiet);
    cancel::cancel_from(&mut registry, "18466209754");

    appointments::print_appointments(&registry, cfg);

    print::fat_separator();
    print::centerln("Demonstration complete");
}
