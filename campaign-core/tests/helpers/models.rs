use crate::models::Action;
use crate::models::common::{TimeWindow, Timestamp};
use crate::utils::Environment;

pub const DEFAULT_ACTIVITY: &str = "act1";
pub const DEFAULT_LOCATION: &str = "loc1";

/// Returns a timestamp of given hour and minute on the first day since epoch.
pub fn hm(hour: i64, minute: i64) -> Timestamp {
    hour * 3600 + minute * 60
}

pub fn test_action(id: &str, hours: (i64, i64), activity: &str, location: &str) -> Action {
    Action::new(id, TimeWindow::new(hm(hours.0, 0), hm(hours.1, 0)), activity, location)
}

pub fn test_action_on_day(id: &str, day: i64, hours: (i64, i64), activity: &str, location: &str) -> Action {
    let offset = day * 86_400;
    Action::new(id, TimeWindow::new(offset + hm(hours.0, 0), offset + hm(hours.1, 0)), activity, location)
}

pub fn test_environment() -> Environment {
    Environment::new_silent()
}

pub fn get_ids(actions: &[Action]) -> Vec<&str> {
    actions.iter().map(|action| action.id.as_str()).collect()
}
