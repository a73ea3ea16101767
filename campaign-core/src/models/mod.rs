//! A collection of models to represent campaign actions and groups built from them.

pub mod common;

mod action;
pub use self::action::Action;

mod group;
pub use self::group::{Group, GroupKind};

mod schedule;
pub use self::schedule::{Day, Schedule};
