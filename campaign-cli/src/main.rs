//! A command line interface to build campaign schedules, dashboard action lists and sign up requests.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

fn main() {
    cli::run_subcommand(cli::get_app().get_matches());
}

mod cli {
    use super::commands::create_write_buffer;
    use super::commands::dashboard::{get_dashboard_app, run_dashboard};
    use super::commands::register::{get_register_app, run_register};
    use super::commands::schedule::{get_schedule_app, run_schedule};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Campaign Tools")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to group campaign actions and process sign up forms")
            .subcommand(get_schedule_app())
            .subcommand(get_dashboard_app())
            .subcommand(get_register_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("schedule", matches)) => run_schedule(matches, create_write_buffer),
            Some(("dashboard", matches)) => run_dashboard(matches, create_write_buffer),
            Some(("register", matches)) => run_register(matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
