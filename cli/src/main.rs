mod commands;
mod terminal;

use clinic_common::config::Config;
use commands::{CommandLine, Commands, appointments, book, cancel, demo, professionals};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let command_line = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: command_line.no_banner,
        quiet: command_line.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match command_line.command {
        Commands::Professionals => professionals::professionals(&cfg),
        Commands::Book {
            doctor_id,
            name,
            mobile,
            time,
        } => book::book(doctor_id, &name, &mobile, &time, &cfg),
        Commands::Appointments => appointments::appointments(&cfg),
        Commands::Cancel { mobile } => cancel::cancel(&mobile, &cfg),
        Commands::Demo => demo::demo(&cfg),
    }

    Ok(())
}
