//! Specifies registration form handling: form validation, request payload and messages
//! shown to the user.

#[cfg(test)]
#[path = "../../tests/unit/format/registration_test.rs"]
mod registration_test;

use crate::format::messages::{Message, MessageCatalog, ResolvedMessage};
use crate::format::{MultiFormatError, create_deserialize_error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufReader, BufWriter, Read, Write};

/// A prefix of all registration message ids.
pub const MESSAGE_PREFIX: &str = "misc.signup.";

/// A registration form filled by the user.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Password.
    pub password: String,
    /// True if privacy policy is accepted.
    #[serde(default)]
    pub privacy_accepted: bool,
}

/// An organization the user registers with.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Organization {
    /// An organization id.
    pub id: String,
    /// An organization title.
    pub title: String,
}

/// A registration request payload.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Password.
    pub password: String,
    /// An organization id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

/// Specifies why registration cannot be done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    /// Privacy policy is not accepted.
    Privacy,
    /// The user already exists.
    Exists,
    /// Registration data is invalid.
    Invalid,
    /// Registration is rejected with unexpected status.
    Unknown(u16),
}

impl RegistrationError {
    /// Maps a status of rejected registration request to an error.
    pub fn from_status(status: u16) -> Self {
        match status {
            409 => Self::Exists,
            400 => Self::Invalid,
            _ => Self::Unknown(status),
        }
    }

    /// Returns a message which explains the error to the user.
    pub fn to_message(&self, form: &RegistrationForm) -> Message {
        match self {
            Self::Privacy => create_message("error.privacy"),
            Self::Exists => with_form_values(create_message("error.exists"), form),
            Self::Invalid => create_message("error.invalid"),
            Self::Unknown(status) => create_message("error.unknown").with_value("status", status.to_string().as_str()),
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Privacy => write!(f, "privacy policy is not accepted"),
            Self::Exists => write!(f, "user already exists"),
            Self::Invalid => write!(f, "registration data is invalid"),
            Self::Unknown(status) => write!(f, "registration is rejected with status {status}"),
        }
    }
}

impl std::error::Error for RegistrationError {}

impl RegistrationForm {
    /// Checks that form can be submitted.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.privacy_accepted { Ok(()) } else { Err(RegistrationError::Privacy) }
    }

    /// Creates a registration request from the valid form.
    pub fn to_request(&self, organization: Option<&Organization>) -> Result<RegistrationRequest, RegistrationError> {
        self.validate()?;

        Ok(RegistrationRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
            org_id: organization.map(|org| org.id.clone()),
        })
    }
}

/// Returns a label of submit button.
pub fn get_submit_label(organization: Option<&Organization>) -> Message {
    create_message(if organization.is_some() { "submitButtonOrg" } else { "submitButton" })
}

/// Returns a label of privacy check box.
pub fn get_privacy_label(organization: Option<&Organization>) -> Message {
    match organization {
        Some(org) => create_message("privacyCheckOrg").with_value("org", org.title.as_str()),
        None => create_message("privacyCheck"),
    }
}

/// Returns a message shown when registration is completed.
pub fn get_done_message(form: &RegistrationForm) -> Message {
    with_form_values(create_message("done.title"), form)
}

/// A result of registration form processing.
#[derive(Clone, Debug, Serialize)]
pub struct RegistrationOutcome {
    /// A request to send, when the form is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RegistrationRequest>,
    /// A message shown when registration is completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<ResolvedMessage>,
    /// An error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResolvedMessage>,
    /// Form labels.
    pub labels: Vec<ResolvedMessage>,
}

impl RegistrationOutcome {
    /// Checks whether outcome has an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Processes registration form. When `status` of a sent request is known, the outcome reports
/// completion or the reason of rejection, otherwise it carries a request to send.
pub fn process_registration(
    form: &RegistrationForm,
    organization: Option<&Organization>,
    status: Option<u16>,
    catalog: &MessageCatalog,
) -> RegistrationOutcome {
    let labels =
        vec![catalog.resolve(&get_submit_label(organization)), catalog.resolve(&get_privacy_label(organization))];
    let outcome = RegistrationOutcome { request: None, done: None, error: None, labels };

    let resolve_error = |err: RegistrationError| Some(catalog.resolve(&err.to_message(form)));

    match status {
        Some(status) if (200..300).contains(&status) => {
            RegistrationOutcome { done: Some(catalog.resolve(&get_done_message(form))), ..outcome }
        }
        Some(status) => RegistrationOutcome { error: resolve_error(RegistrationError::from_status(status)), ..outcome },
        None => match form.to_request(organization) {
            Ok(request) => RegistrationOutcome { request: Some(request), ..outcome },
            Err(err) => RegistrationOutcome { error: resolve_error(err), ..outcome },
        },
    }
}

/// Deserializes registration form in json format from `BufReader`.
pub fn deserialize_registration_form<R: Read>(reader: BufReader<R>) -> Result<RegistrationForm, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0001", "registration form", err))
}

/// Serializes registration outcome in json to `writer`.
pub fn serialize_registration_outcome<W: Write>(
    outcome: &RegistrationOutcome,
    writer: &mut BufWriter<W>,
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, outcome)
}

fn create_message(id: &str) -> Message {
    Message::new(format!("{MESSAGE_PREFIX}{id}").as_str())
}

fn with_form_values(message: Message, form: &RegistrationForm) -> Message {
    message
        .with_value("firstName", form.first_name.as_str())
        .with_value("lastName", form.last_name.as_str())
        .with_value("email", form.email.as_str())
        .with_value("phone", form.phone.as_str())
}
