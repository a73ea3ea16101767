use crate::format::{MultiFormatError, create_deserialize_error};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// Specifies how actions of a group are presented.
#[derive(Clone, Copy, Deserialize, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// A single action.
    Single,
    /// Back-to-back actions of the same activity at the same location.
    Shifts,
    /// Simultaneous actions of the same activity.
    Parallel,
}

/// An action with the user specific state.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledAction {
    /// An action id.
    pub id: String,
    /// Start time in RFC3339 format.
    pub start_time: String,
    /// End time in RFC3339 format.
    pub end_time: String,
    /// An activity id.
    pub activity: String,
    /// A location id.
    pub location: String,
    /// True if the user is booked on this action.
    pub booked: bool,
    /// True if the user has responded to this action.
    pub responded: bool,
}

/// A group of actions.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group type.
    #[serde(rename(deserialize = "type", serialize = "type"))]
    pub type_field: GroupType,
    /// An activity id shared by all actions.
    pub activity: String,
    /// A location id shared by all actions, set only for shifts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start time of the earliest action in RFC3339 format.
    pub start_time: String,
    /// End time of the latest action in RFC3339 format.
    pub end_time: String,
    /// Actions in the group order.
    pub actions: Vec<ScheduledAction>,
}

/// Groups of one calendar day.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Eq)]
pub struct Day {
    /// A sortable day key in `yyyyMMdd` form.
    pub key: String,
    /// A day label in `dd/MM` form.
    pub date: String,
    /// Day groups.
    pub groups: Vec<Group>,
}

/// A campaign schedule.
#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Eq)]
pub struct Schedule {
    /// Days ordered by their key.
    pub days: Vec<Day>,
}

/// Serializes schedule in json to `writer`.
pub fn serialize_schedule<W: Write>(schedule: &Schedule, writer: &mut BufWriter<W>) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, schedule)
}

/// Deserializes schedule in json format from `BufReader`.
pub fn deserialize_schedule<R: Read>(reader: BufReader<R>) -> Result<Schedule, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0003", "schedule", err))
}
