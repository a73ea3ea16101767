use crate::models::common::TimeWindow;
use crate::models::Action;

/// Specifies how actions of a group are related to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// A group with exactly one action.
    Single,
    /// Back-to-back actions of the same activity at the same location.
    Shifts,
    /// Simultaneous actions of the same activity, possibly at different locations.
    Parallel,
}

/// Represents a display group of one or more actions. A group can be changed only while
/// actions are grouped, after that it is read only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    kind: GroupKind,
    activity: String,
    location: Option<String>,
    time: TimeWindow,
    actions: Vec<Action>,
}

impl Group {
    /// Creates a new `single` group from given action.
    pub(crate) fn new_single(action: Action) -> Self {
        Self {
            kind: GroupKind::Single,
            activity: action.activity.clone(),
            location: None,
            time: action.time.clone(),
            actions: vec![action],
        }
    }

    /// Adds action as the next shift. The group becomes `shifts` group.
    pub(crate) fn push_shift(&mut self, action: Action) {
        if self.kind == GroupKind::Single {
            self.kind = GroupKind::Shifts;
            self.location = Some(self.first().location.clone());
        }

        self.time.end = action.time.end;
        self.actions.push(action);
    }

    /// Adds action as a parallel one. The group becomes `parallel` group.
    pub(crate) fn push_parallel(&mut self, action: Action) {
        self.kind = GroupKind::Parallel;
        self.actions.push(action);
    }

    /// Returns group kind.
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Returns activity shared by all actions in the group.
    pub fn activity(&self) -> &str {
        self.activity.as_str()
    }

    /// Returns location shared by all actions. Defined only for `shifts` group.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns time span covered by the group.
    pub fn time(&self) -> &TimeWindow {
        &self.time
    }

    /// Returns actions in the order they were added to the group.
    pub fn actions(&self) -> &[Action] {
        self.actions.as_slice()
    }

    /// Returns the first action of the group.
    pub fn first(&self) -> &Action {
        // NOTE group is never empty: it is created from an action and actions are never removed
        &self.actions[0]
    }

    /// Returns amount of actions in the group.
    pub fn size(&self) -> usize {
        self.actions.len()
    }
}
