#[cfg(test)]
#[path = "../../tests/unit/commands/schedule_test.rs"]
mod schedule_test;

use super::*;
use campaign_cli::pragmatic::core::prelude::{InfoLogger, create_schedule};
use campaign_cli::pragmatic::format::campaign::PragmaticCampaign;
use campaign_cli::pragmatic::format::schedule::PragmaticSchedule;
use clap::ArgAction;
use std::sync::Arc;

const CAMPAIGN_ARG_NAME: &str = "CAMPAIGN";
const LOG_ARG_NAME: &str = "log";

pub fn get_schedule_app() -> Command {
    Command::new("schedule")
        .about("Groups campaign actions into a schedule of days")
        .arg(Arg::new(CAMPAIGN_ARG_NAME).help("Sets the campaign file to use").required(true).index(1))
        .arg(create_config_arg())
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether grouping summary is logged to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(create_out_result_arg())
}

pub fn run_schedule(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let campaign_path = get_required_value(matches, CAMPAIGN_ARG_NAME)?;
    let config = get_config(matches)?;
    let offset = config.get_utc_offset()?;

    let logger: Option<InfoLogger> =
        if matches.get_flag(LOG_ARG_NAME) { Some(Arc::new(|msg: &str| eprintln!("{msg}"))) } else { None };
    let environment = config.create_environment(logger);

    let context = BufReader::new(open_file(campaign_path, "campaign")?)
        .read_pragmatic()
        .map_err(|errs| format!("cannot read campaign:\n{}", errs.to_json()))?;

    let schedule = create_schedule(context.actions.clone(), i64::from(offset.whole_seconds()), &environment);

    schedule
        .write_pragmatic(&context, offset, get_out_writer(matches, out_writer_func)?)
        .map_err(|err| format!("cannot write schedule: '{err}'"))
}
