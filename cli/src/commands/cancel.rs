use clinic_common::config::Config;
use clinic_common::success;
use clinic_core::registry::Registry;
use clinic_core::seed;
use tracing::error;

use crate::terminal::print;

pub fn cancel(mobile: &str, cfg: &Config) {
    let mut registry: Registry = seed::demo_registry();
    print::header("cancelling a booking", cfg.quiet);
    cancel_from(&mut registry, mobile);
}

/// Cancels the earliest booking under `mobile` and reports the outcome.
pub fn cancel_from(registry: &mut Registry, mobile: &str) {
    match registry.cancel_booking(mobile) {
        Ok(()) => success!("Cancelled the appointment booked under {mobile}"),
        Err(reason) => error!("Cancellation failed: {reason}"),
    }
}
