//! Contains the logic which clusters actions of one day into display groups.

#[cfg(test)]
#[path = "../../tests/unit/construction/grouping_test.rs"]
mod grouping_test;

use crate::models::{Action, Group, GroupKind};

/// Specifies a result of matching an action against an existing group.
enum GroupMatch {
    /// Action continues the group as the next shift.
    Shift,
    /// Action runs in parallel with the group.
    Parallel,
    /// Action does not fit the group, the next group can be checked.
    Skip,
    /// Action does not fit the group and no further groups are checked.
    Barrier,
}

/// Groups actions of one day into an ordered list of display groups.
///
/// Actions are processed in the given order. Each action is offered to the existing groups in
/// their creation order and the first group which accepts it wins. If no group accepts the
/// action, it starts a new `single` group.
///
/// A `single` group of another activity stops the scan: the action starts a new group even
/// when some later group would accept it.
pub fn group_actions<I>(actions: I) -> Vec<Group>
where
    I: IntoIterator<Item = Action>,
{
    let mut groups: Vec<Group> = Vec::new();

    'actions: for action in actions {
        for group in groups.iter_mut() {
            match match_group(group, &action) {
                GroupMatch::Shift => {
                    group.push_shift(action);
                    continue 'actions;
                }
                GroupMatch::Parallel => {
                    group.push_parallel(action);
                    continue 'actions;
                }
                GroupMatch::Skip => {}
                GroupMatch::Barrier => break,
            }
        }

        groups.push(Group::new_single(action));
    }

    groups
}

fn match_group(group: &Group, action: &Action) -> GroupMatch {
    match group.kind() {
        GroupKind::Single => {
            let prev = group.first();

            if prev.activity != action.activity {
                GroupMatch::Barrier
            } else if prev.location == action.location && prev.time.is_followed_by(&action.time) {
                GroupMatch::Shift
            } else if prev.time == action.time {
                GroupMatch::Parallel
            } else {
                GroupMatch::Skip
            }
        }
        GroupKind::Shifts => {
            let is_next_shift = group.activity() == action.activity
                && group.location() == Some(action.location.as_str())
                && group.time().is_followed_by(&action.time);

            if is_next_shift { GroupMatch::Shift } else { GroupMatch::Skip }
        }
        GroupKind::Parallel => {
            let is_parallel = group.activity() == action.activity && group.time() == &action.time;

            if is_parallel { GroupMatch::Parallel } else { GroupMatch::Skip }
        }
    }
}
