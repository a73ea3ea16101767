//! Core crate contains the main building blocks to turn a flat list of campaign ***actions***
//! into a displayable schedule: actions are bucketed by calendar day and every day is clustered
//! into `single`, `shifts` and `parallel` groups.
//!
//! # Examples
//!
//! ```
//! use campaign_core::prelude::*;
//!
//! let hour = 3600;
//! let actions = vec![
//!     Action::new("1", TimeWindow::new(9 * hour, 10 * hour), "canvassing", "square"),
//!     Action::new("2", TimeWindow::new(10 * hour, 11 * hour), "canvassing", "square"),
//! ];
//!
//! let groups = group_actions(actions);
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].kind(), GroupKind::Shifts);
//! assert_eq!(groups[0].time(), &TimeWindow::new(9 * hour, 11 * hour));
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod utils;
