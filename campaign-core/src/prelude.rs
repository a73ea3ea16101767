//! This module reimports commonly used types.

pub use crate::construction::grouping::group_actions;
pub use crate::construction::schedule::{bucket_by_day, create_schedule};

pub use crate::models::common::{DayIndex, TimeWindow, Timestamp};
pub use crate::models::{Action, Day, Group, GroupKind, Schedule};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
