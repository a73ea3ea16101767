use crate::models::common::DayIndex;
use crate::models::{Action, Group};

/// Represents groups of actions which happen on the same calendar day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Day {
    /// A day index.
    pub index: DayIndex,
    /// Groups in the order of their creation.
    pub groups: Vec<Group>,
}

/// Represents all days of a campaign ordered by day index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Days ordered by their index.
    pub days: Vec<Day>,
}

impl Schedule {
    /// Returns all groups of all days.
    pub fn groups(&self) -> impl Iterator<Item = &Group> + '_ {
        self.days.iter().flat_map(|day| day.groups.iter())
    }

    /// Returns all actions of all days.
    pub fn actions(&self) -> impl Iterator<Item = &Action> + '_ {
        self.groups().flat_map(|group| group.actions().iter())
    }
}
