use crate::models::common::TimeWindow;
use crate::utils::GenericResult;

/// Represents a scheduled campaign action: an activity happening at some location within
/// given time window.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// An unique action id.
    pub id: String,
    /// Time window when action happens.
    pub time: TimeWindow,
    /// An id of activity type.
    pub activity: String,
    /// An id of location.
    pub location: String,
}

impl Action {
    /// Creates a new instance of `Action`.
    pub fn new(id: &str, time: TimeWindow, activity: &str, location: &str) -> Self {
        Self { id: id.to_string(), time, activity: activity.to_string(), location: location.to_string() }
    }

    /// Creates a new instance of `Action` checking that its time window is not reversed.
    pub fn try_new(id: &str, time: TimeWindow, activity: &str, location: &str) -> GenericResult<Self> {
        if time.end < time.start {
            return Err(format!("invalid input: action '{id}' ends before it starts").into());
        }

        Ok(Self::new(id, time, activity, location))
    }
}
