//! Specifies logic to create a short list of upcoming actions shown on the dashboard.

#[cfg(test)]
#[path = "../../tests/unit/format/dashboard_test.rs"]
mod dashboard_test;

use crate::format::campaign::CampaignContext;
use crate::to_offset_time;
use campaign_core::models::Action as CoreAction;
use campaign_core::utils::{GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use time::UtcOffset;
use time::macros::format_description;

/// Default amount of visible actions.
pub const DEFAULT_MAX_VISIBLE: usize = 4;

/// An action list item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionListItem {
    /// An action id.
    pub id: String,
    /// A start time label in `d/M HH:mm` form.
    pub label: String,
    /// An activity title or id when title is not known.
    pub activity: String,
}

/// A list of visible actions.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionList {
    /// Visible actions.
    pub items: Vec<ActionListItem>,
    /// Amount of actions which are not shown.
    pub num_extra: usize,
}

/// Creates an action list which shows at most `max_visible` actions in input order. All actions
/// are shown when `max_visible` is not set or zero.
pub fn create_action_list(
    context: &CampaignContext,
    max_visible: Option<usize>,
    offset: UtcOffset,
) -> GenericResult<ActionList> {
    let total = context.actions.len();
    let visible =
        max_visible.filter(|&max_visible| max_visible > 0).map_or(total, |max_visible| max_visible.min(total));

    let items = context
        .actions
        .iter()
        .take(visible)
        .map(|action| create_item(action, context, offset))
        .collect::<GenericResult<Vec<_>>>()?;

    Ok(ActionList { items, num_extra: total - visible })
}

/// Serializes action list in json to `writer`.
pub fn serialize_action_list<W: Write>(list: &ActionList, writer: &mut BufWriter<W>) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, list)
}

fn create_item(action: &CoreAction, context: &CampaignContext, offset: UtcOffset) -> GenericResult<ActionListItem> {
    let label = to_offset_time(action.time.start, offset)?
        .format(format_description!("[day padding:none]/[month padding:none] [hour]:[minute]"))
        .map_err(|err| GenericError::from(format!("cannot format action time: '{err}'")))?;

    let activity = context.activity_title(action.activity.as_str()).unwrap_or(action.activity.as_str()).to_string();

    Ok(ActionListItem { id: action.id.clone(), label, activity })
}
