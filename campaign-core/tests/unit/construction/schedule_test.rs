use super::*;
use crate::helpers::models::*;
use crate::models::GroupKind;
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

#[test]
fn can_bucket_actions_by_day_keeping_input_order() {
    let actions = vec![
        test_action_on_day("3", 2, (9, 10), "act1", "loc1"),
        test_action_on_day("1", 0, (12, 13), "act1", "loc1"),
        test_action_on_day("2", 0, (9, 10), "act1", "loc1"),
        test_action_on_day("4", 1, (9, 10), "act2", "loc1"),
    ];

    let buckets = bucket_by_day(actions, 0);

    let buckets = buckets.iter().map(|(index, actions)| (*index, get_ids(actions))).collect::<Vec<_>>();
    assert_eq!(buckets, vec![(0, vec!["1", "2"]), (1, vec!["4"]), (2, vec!["3"])]);
}

parameterized_test! {can_use_display_offset_for_day_index, (hour, offset_hours, expected), {
    can_use_display_offset_for_day_index_impl(hour, offset_hours, expected);
}}

can_use_display_offset_for_day_index! {
    case01_utc: (23, 0, 1),
    case02_positive_offset_moves_to_next_day: (23, 2, 2),
    case03_negative_offset_moves_to_prev_day: (1, -2, 0),
    case04_negative_offset_same_day: (3, -2, 1),
}

fn can_use_display_offset_for_day_index_impl(hour: i64, offset_hours: i64, expected: DayIndex) {
    let actions = vec![test_action_on_day("1", 1, (hour, hour + 1), "act1", "loc1")];

    let buckets = bucket_by_day(actions, offset_hours * 3600);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].0, expected);
}

#[test]
fn can_group_each_day_independently() {
    let actions = vec![
        test_action_on_day("1", 0, (9, 10), "act1", "loc1"),
        test_action_on_day("2", 1, (9, 10), "act1", "loc1"),
        test_action_on_day("3", 0, (10, 11), "act1", "loc1"),
        test_action_on_day("4", 1, (9, 10), "act1", "loc2"),
    ];

    let schedule = create_schedule(actions, 0, &test_environment());

    assert_eq!(schedule.days.len(), 2);
    assert_eq!(schedule.days[0].index, 0);
    assert_eq!(schedule.days[0].groups.len(), 1);
    assert_eq!(schedule.days[0].groups[0].kind(), GroupKind::Shifts);
    assert_eq!(get_ids(schedule.days[0].groups[0].actions()), vec!["1", "3"]);
    assert_eq!(schedule.days[1].index, 1);
    assert_eq!(schedule.days[1].groups.len(), 1);
    assert_eq!(schedule.days[1].groups[0].kind(), GroupKind::Parallel);
    assert_eq!(schedule.actions().count(), 4);
}

#[test]
fn can_produce_same_schedule_with_and_without_parallelism() {
    let actions = (0..30)
        .map(|idx| {
            test_action_on_day(
                format!("{idx}").as_str(),
                idx % 5,
                (8 + idx % 3, 9 + idx % 3),
                format!("act{}", idx % 2).as_str(),
                "loc1",
            )
        })
        .collect::<Vec<_>>();

    let parallel = create_schedule(actions.clone(), 0, &Environment { parallelism: true, ..test_environment() });
    let sequential = create_schedule(actions, 0, &Environment { parallelism: false, ..test_environment() });

    assert_eq!(parallel, sequential);
}

#[test]
fn can_log_grouping_summary() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let environment = Environment::new(
        {
            let messages = messages.clone();
            Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
        },
        false,
    );
    let actions = vec![
        test_action_on_day("1", 0, (9, 10), "act1", "loc1"),
        test_action_on_day("2", 0, (10, 11), "act1", "loc1"),
        test_action_on_day("3", 1, (9, 10), "act1", "loc1"),
    ];

    create_schedule(actions, 0, &environment);

    assert_eq!(messages.lock().unwrap().clone(), vec!["grouped 3 actions into 2 groups over 2 days".to_string()]);
}

#[test]
fn can_create_empty_schedule() {
    let schedule = create_schedule(vec![], 0, &test_environment());

    assert!(schedule.days.is_empty());
    assert_eq!(schedule.groups().count(), 0);
}

prop_compose! {
    fn generate_multi_day_actions()
        (raw in prop::collection::vec((0..4_i64, 0..2_i64, 0..2_i64, 0..23_i64, 1..3_i64), 0..40))
    -> Vec<Action> {
        raw.into_iter()
            .enumerate()
            .map(|(idx, (day, activity, location, start, duration))| {
                test_action_on_day(
                    format!("a{idx}").as_str(),
                    day,
                    (start, start + duration),
                    format!("act{activity}").as_str(),
                    format!("loc{location}").as_str(),
                )
            })
            .collect()
    }
}

proptest! {
    #[test]
    fn can_keep_every_action_once_in_schedule(
        actions in generate_multi_day_actions(),
        offset_hours in prop::sample::select(vec![-5_i64, 0, 2]),
    ) {
        let offset = offset_hours * 3600;
        let schedule = create_schedule(actions.clone(), offset, &test_environment());

        let mut expected = get_ids(&actions);
        let mut actual = schedule.actions().map(|action| action.id.as_str()).collect::<Vec<_>>();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);

        for pair in schedule.days.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }

        for day in schedule.days.iter() {
            prop_assert!(!day.groups.is_empty());
            for action in day.groups.iter().flat_map(|group| group.actions().iter()) {
                prop_assert_eq!(get_day_index(action.time.start, offset), day.index);
            }
        }
    }

    #[test]
    fn can_build_same_schedule_regardless_of_parallelism(actions in generate_multi_day_actions()) {
        let parallel = create_schedule(actions.clone(), 0, &Environment { parallelism: true, ..test_environment() });
        let sequential = create_schedule(actions, 0, &Environment { parallelism: false, ..test_environment() });

        prop_assert_eq!(parallel, sequential);
    }
}
