use super::*;
use crate::helpers::*;
use campaign_cli::pragmatic::format::schedule::{GroupType, deserialize_schedule};

fn run_schedule_app(args: Vec<&str>) -> Result<(), String> {
    let matches = get_schedule_app().try_get_matches_from(args).map_err(|err| err.to_string())?;

    run_schedule(&matches, create_write_buffer)
}

#[test]
fn can_run_schedule() {
    let args = vec!["schedule", CAMPAIGN_PATH, "--log"];
    let matches = get_schedule_app().try_get_matches_from(args).unwrap();

    run_schedule(&matches, create_dummy_write_buffer).unwrap();
}

#[test]
fn can_write_grouped_schedule() {
    let result = run_with_out_result(vec!["schedule", CAMPAIGN_PATH], run_schedule_app).expect("cannot run schedule");

    let schedule = deserialize_schedule(BufReader::new(result.as_bytes())).expect("cannot read schedule");
    let days = schedule.days.iter().map(|day| (day.key.as_str(), day.date.as_str())).collect::<Vec<_>>();
    assert_eq!(days, vec![("20160401", "01/04"), ("20160402", "02/04")]);

    let first_day = &schedule.days[0];
    assert_eq!(
        first_day.groups.iter().map(|group| group.type_field).collect::<Vec<_>>(),
        vec![GroupType::Shifts, GroupType::Single]
    );
    let shifts = &first_day.groups[0];
    assert_eq!(shifts.location.as_deref(), Some("loc1"));
    assert_eq!(shifts.start_time, "2016-04-01T09:00:00Z");
    assert_eq!(shifts.end_time, "2016-04-01T11:00:00Z");
    assert!(shifts.actions[0].booked);
    assert!(!shifts.actions[1].booked);
    assert!(first_day.groups[1].actions[0].responded);

    let second_day = &schedule.days[1];
    assert_eq!(second_day.groups.len(), 1);
    assert_eq!(second_day.groups[0].type_field, GroupType::Parallel);
    assert_eq!(second_day.groups[0].location, None);
}

#[test]
fn can_write_schedule_with_config() {
    let args = vec!["schedule", CAMPAIGN_PATH, "--config", CONFIG_PATH];

    let result = run_with_out_result(args, run_schedule_app).expect("cannot run schedule");

    let schedule = deserialize_schedule(BufReader::new(result.as_bytes())).expect("cannot read schedule");
    assert_eq!(schedule.days.len(), 2);
    assert_eq!(schedule.days[0].key, "20160401");
    assert_eq!(schedule.days[0].groups[0].start_time, "2016-04-01T09:00:00Z");
}

#[test]
fn can_return_format_errors_for_invalid_campaign() {
    let args = vec!["schedule", INVALID_CAMPAIGN_PATH];
    let matches = get_schedule_app().try_get_matches_from(args).unwrap();

    let err = run_schedule(&matches, create_dummy_write_buffer).expect_err("expect error");

    assert!(err.starts_with("cannot read campaign"));
    assert!(err.contains("E1000"));
    assert!(err.contains("E1001"));
    assert!(err.contains("E1002"));
}

#[test]
fn can_return_error_for_missing_campaign_file() {
    let args = vec!["schedule", "tests/data/unknown.json"];
    let matches = get_schedule_app().try_get_matches_from(args).unwrap();

    let err = run_schedule(&matches, create_dummy_write_buffer).expect_err("expect error");

    assert!(err.starts_with("cannot open campaign file"));
}

#[test]
fn can_reject_missing_campaign_argument() {
    assert!(get_schedule_app().try_get_matches_from(vec!["schedule"]).is_err());
}
