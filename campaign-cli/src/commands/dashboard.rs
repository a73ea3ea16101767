#[cfg(test)]
#[path = "../../tests/unit/commands/dashboard_test.rs"]
mod dashboard_test;

use super::*;
use campaign_cli::pragmatic::format::campaign::PragmaticCampaign;
use campaign_cli::pragmatic::format::dashboard::{create_action_list, serialize_action_list};
use clap::ArgAction;

const CAMPAIGN_ARG_NAME: &str = "CAMPAIGN";
const MAX_VISIBLE_ARG_NAME: &str = "max-visible";
const SHOW_ALL_ARG_NAME: &str = "show-all";

pub fn get_dashboard_app() -> Command {
    Command::new("dashboard")
        .about("Creates a short list of campaign actions shown on the dashboard")
        .arg(Arg::new(CAMPAIGN_ARG_NAME).help("Sets the campaign file to use").required(true).index(1))
        .arg(create_config_arg())
        .arg(
            Arg::new(MAX_VISIBLE_ARG_NAME)
                .help("Specifies max amount of visible actions, zero shows all")
                .short('m')
                .long(MAX_VISIBLE_ARG_NAME),
        )
        .arg(
            Arg::new(SHOW_ALL_ARG_NAME)
                .help("Shows all actions")
                .short('a')
                .long(SHOW_ALL_ARG_NAME)
                .action(ArgAction::SetTrue)
                .conflicts_with(MAX_VISIBLE_ARG_NAME),
        )
        .arg(create_out_result_arg())
}

pub fn run_dashboard(matches: &ArgMatches, out_writer_func: OutWriterFn) -> Result<(), String> {
    let campaign_path = get_required_value(matches, CAMPAIGN_ARG_NAME)?;
    let config = get_config(matches)?;
    let offset = config.get_utc_offset()?;

    let max_visible = if matches.get_flag(SHOW_ALL_ARG_NAME) {
        None
    } else {
        let max_visible = parse_int_value::<usize>(matches, MAX_VISIBLE_ARG_NAME, "max visible")?;
        Some(max_visible.unwrap_or(config.get_max_visible()))
    };

    let context = BufReader::new(open_file(campaign_path, "campaign")?)
        .read_pragmatic()
        .map_err(|errs| format!("cannot read campaign:\n{}", errs.to_json()))?;

    let list = create_action_list(&context, max_visible, offset).map_err(|err| err.to_string())?;

    let mut writer = get_out_writer(matches, out_writer_func)?;
    serialize_action_list(&list, &mut writer).map_err(|err| format!("cannot write action list: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write action list: '{err}'"))
}
