//! Contains the logic which splits actions into calendar days and groups every day.

#[cfg(test)]
#[path = "../../tests/unit/construction/schedule_test.rs"]
mod schedule_test;

use crate::construction::grouping::group_actions;
use crate::models::common::{DayIndex, get_day_index};
use crate::models::{Action, Day, Schedule};
use crate::utils::{Environment, parallel_into_collect};
use std::collections::BTreeMap;

/// Splits actions into buckets by calendar day of their start time observed with given display
/// offset (in seconds). Buckets are ordered by day index, actions keep their input order.
pub fn bucket_by_day(actions: Vec<Action>, offset: i64) -> Vec<(DayIndex, Vec<Action>)> {
    actions
        .into_iter()
        .fold(BTreeMap::<DayIndex, Vec<Action>>::new(), |mut buckets, action| {
            buckets.entry(get_day_index(action.time.start, offset)).or_default().push(action);
            buckets
        })
        .into_iter()
        .collect()
}

/// Creates a schedule: actions are bucketed by day and each day is grouped independently.
pub fn create_schedule(actions: Vec<Action>, offset: i64, environment: &Environment) -> Schedule {
    let total_actions = actions.len();
    let buckets = bucket_by_day(actions, offset);

    let create_day = |(index, actions): (DayIndex, Vec<Action>)| Day { index, groups: group_actions(actions) };

    let days = if environment.parallelism {
        parallel_into_collect(buckets, create_day)
    } else {
        buckets.into_iter().map(create_day).collect()
    };

    let schedule = Schedule { days };

    (environment.logger)(&format!(
        "grouped {} actions into {} groups over {} days",
        total_actions,
        schedule.groups().count(),
        schedule.days.len()
    ));

    schedule
}
