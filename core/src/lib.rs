//! Core operations of the clinic demonstrator.
//!
//! Everything stateful lives in the [`registry`]: one value owning the
//! professional roster and the appointment book, constructed by the driver
//! and handed to every operation. [`seed`] provides the demonstration
//! roster the drivers start from.

pub mod registry;
pub mod seed;
