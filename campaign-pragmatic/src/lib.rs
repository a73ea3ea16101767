//! Pragmatic crate reads campaign actions from a simple **pragmatic** json format and writes
//! grouped schedules, dashboard action lists and registration results back to json.
//!
//! # Examples
//!
//! ```
//! use campaign_pragmatic::core::prelude::*;
//! use campaign_pragmatic::format::campaign::PragmaticCampaign;
//! use campaign_pragmatic::format::schedule::PragmaticSchedule;
//! use std::io::BufWriter;
//!
//! let campaign = r#"{
//!   "actions": [
//!     { "id": "1", "startTime": "2016-04-01T09:00:00Z", "endTime": "2016-04-01T10:00:00Z",
//!       "activity": { "id": "a1" }, "location": { "id": "l1" } },
//!     { "id": "2", "startTime": "2016-04-01T10:00:00Z", "endTime": "2016-04-01T11:00:00Z",
//!       "activity": { "id": "a1" }, "location": { "id": "l1" } }
//!   ]
//! }"#;
//!
//! let context = campaign.to_string().read_pragmatic().expect("valid campaign");
//! let schedule = create_schedule(context.actions.clone(), 0, &Environment::new_silent());
//!
//! let mut buffer = Vec::new();
//! schedule
//!     .write_pragmatic(&context, time::UtcOffset::UTC, BufWriter::new(&mut buffer))
//!     .expect("cannot write schedule");
//!
//! assert!(String::from_utf8(buffer).unwrap().contains("\"shifts\""));
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub use campaign_core as core;

pub mod format;

use campaign_core::prelude::{GenericError, GenericResult, Timestamp};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

/// Formats timestamp as RFC3339 string in UTC.
pub fn format_time(time: Timestamp) -> GenericResult<String> {
    to_offset_time(time, UtcOffset::UTC)
        .and_then(|time| time.format(&Rfc3339).map_err(|err| format!("cannot format time: '{err}'").into()))
}

/// Parses RFC3339 string into timestamp. Times with non zero fraction of a second are rejected
/// as timestamps have a precision of one second.
pub fn parse_time(time: &str) -> GenericResult<Timestamp> {
    let parsed = OffsetDateTime::parse(time, &Rfc3339)
        .map_err(|err| GenericError::from(format!("cannot parse time '{time}': '{err}'")))?;

    if parsed.nanosecond() != 0 {
        return Err(format!("cannot parse time '{time}': fractions of a second are not supported").into());
    }

    Ok(parsed.unix_timestamp())
}

/// Parses display offset in `+HH:MM` form. `Z` and `UTC` stand for zero offset.
pub fn parse_utc_offset(offset: &str) -> GenericResult<UtcOffset> {
    match offset {
        "Z" | "UTC" => Ok(UtcOffset::UTC),
        _ => UtcOffset::parse(offset, format_description!("[offset_hour sign:mandatory]:[offset_minute]"))
            .map_err(|err| format!("cannot parse utc offset '{offset}': '{err}'").into()),
    }
}

/// Converts timestamp to date time observed with given display offset.
pub(crate) fn to_offset_time(time: Timestamp, offset: UtcOffset) -> GenericResult<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(time)
        .map(|time| time.to_offset(offset))
        .map_err(|err| GenericError::from(format!("cannot convert timestamp '{time}': '{err}'")))
}
