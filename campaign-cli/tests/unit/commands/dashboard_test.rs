use super::*;
use crate::helpers::*;
use campaign_cli::pragmatic::format::dashboard::ActionList;

fn run_dashboard_app(args: Vec<&str>) -> Result<(), String> {
    let matches = get_dashboard_app().try_get_matches_from(args).map_err(|err| err.to_string())?;

    run_dashboard(&matches, create_write_buffer)
}

fn get_action_list(args: Vec<&str>) -> ActionList {
    let result = run_with_out_result(args, run_dashboard_app).expect("cannot run dashboard");

    serde_json::from_str(result.as_str()).expect("cannot read action list")
}

parameterized_test! {can_limit_visible_actions, (extra_args, expected_ids, expected_extra), {
    let args = vec!["dashboard", CAMPAIGN_PATH].into_iter().chain(extra_args).collect::<Vec<_>>();

    let list = get_action_list(args);

    assert_eq!(list.items.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(), expected_ids);
    assert_eq!(list.num_extra, expected_extra);
}}

can_limit_visible_actions! {
    case01_default: (Vec::<&str>::new(), vec!["1", "2", "3", "4"], 1),
    case02_max_visible: (vec!["--max-visible", "1"], vec!["1"], 4),
    case03_zero_max_visible: (vec!["--max-visible", "0"], vec!["1", "2", "3", "4", "5"], 0),
    case04_show_all: (vec!["--show-all"], vec!["1", "2", "3", "4", "5"], 0),
    case05_config: (vec!["--config", CONFIG_PATH], vec!["1", "2"], 3),
    case06_arg_over_config: (vec!["--config", CONFIG_PATH, "--max-visible", "3"], vec!["1", "2", "3"], 2),
}

#[test]
fn can_use_titles_and_display_offset() {
    let list = get_action_list(vec!["dashboard", CAMPAIGN_PATH, "--config", CONFIG_PATH]);

    assert_eq!(list.items[0].label, "1/4 11:00");
    assert_eq!(list.items[0].activity, "Canvassing");
    assert_eq!(list.items[1].activity, "Phone bank");
}

#[test]
fn can_reject_show_all_with_max_visible() {
    let args = vec!["dashboard", CAMPAIGN_PATH, "--show-all", "--max-visible", "2"];

    assert!(get_dashboard_app().try_get_matches_from(args).is_err());
}

#[test]
fn can_return_error_for_invalid_max_visible() {
    let args = vec!["dashboard", CAMPAIGN_PATH, "--max-visible", "many"];
    let matches = get_dashboard_app().try_get_matches_from(args).unwrap();

    let err = run_dashboard(&matches, create_dummy_write_buffer).expect_err("expect error");

    assert!(err.starts_with("cannot get integer value"));
}
