#[cfg(test)]
#[path = "../../../tests/unit/format/campaign/model_test.rs"]
mod model_test;

use crate::format::{MultiFormatError, create_deserialize_error};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A reference to activity or location with an optional human readable title.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct Reference {
    /// An unique id.
    pub id: String,
    /// A title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A scheduled campaign action.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// An unique action id.
    pub id: String,
    /// Action start time in RFC3339 format.
    pub start_time: String,
    /// Action end time in RFC3339 format.
    pub end_time: String,
    /// An activity performed during the action.
    pub activity: Reference,
    /// A location where action takes place.
    pub location: Reference,
}

/// An action on which the user is already booked.
#[derive(Clone, Deserialize, Debug, Serialize)]
pub struct UserAction {
    /// An action id.
    pub id: String,
}

/// A response given by the user to an action.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// An action id.
    pub action_id: String,
}

/// A campaign definition: actions and state of the current user.
#[derive(Clone, Deserialize, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Campaign actions.
    pub actions: Vec<Action>,
    /// Actions on which the user is booked.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_actions: Vec<UserAction>,
    /// Responses of the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<Response>,
}

/// Deserializes campaign in json format from `BufReader`.
pub fn deserialize_campaign<R: Read>(reader: BufReader<R>) -> Result<Campaign, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0000", "campaign", err))
}
