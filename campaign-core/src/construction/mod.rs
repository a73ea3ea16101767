//! This module contains logic to build a schedule from campaign actions.

pub mod grouping;
pub mod schedule;
