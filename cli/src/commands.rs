pub mod appointments;
pub mod book;
pub mod cancel;
pub mod demo;
pub mod professionals;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "An in-memory clinic appointment demonstrator.")]
pub struct CommandLine {
    /// Suppress the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce report output; repeat for less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every health professional on the roster
    #[command(alias = "p")]
    Professionals,
    /// Book an appointment with a professional by id
    #[command(alias = "b")]
    Book {
        doctor_id: u32,
        name: String,
        mobile: String,
        time: String,
    },
    /// Show every existing appointment
    #[command(alias = "a")]
    Appointments,
    /// Cancel the earliest appointment matching a phone number
    #[command(alias = "c")]
    Cancel { mobile: String },
    /// Run the fixed demonstration sequence
    #[command(alias = "d")]
    Demo,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
