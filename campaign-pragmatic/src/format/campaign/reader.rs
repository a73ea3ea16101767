#[cfg(test)]
#[path = "../../../tests/unit/format/campaign/reader_test.rs"]
mod reader_test;

use super::*;
use crate::format::FormatError;
use crate::parse_time;
use campaign_core::models::common::{TimeWindow, Timestamp};

/// Maps api campaign to campaign context checking that actions are well formed.
pub(super) fn map_to_context(campaign: Campaign) -> Result<CampaignContext, MultiFormatError> {
    let mut errors = check_e1000_no_duplicate_ids(&campaign).err().into_iter().collect::<Vec<_>>();

    let actions = campaign
        .actions
        .iter()
        .filter_map(|action| match read_action(action) {
            Ok(action) => Some(action),
            Err(error) => {
                errors.push(error);
                None
            }
        })
        .collect::<Vec<_>>();

    if !errors.is_empty() {
        return Err(errors.into());
    }

    let activity_titles = get_titles(campaign.actions.iter().map(|action| &action.activity));
    let location_titles = get_titles(campaign.actions.iter().map(|action| &action.location));
    let booked = campaign.user_actions.into_iter().map(|action| action.id).collect();
    let responded = campaign.responses.into_iter().map(|response| response.action_id).collect();

    Ok(CampaignContext { actions, activity_titles, location_titles, booked, responded })
}

/// Checks that campaign has no actions with duplicate ids.
fn check_e1000_no_duplicate_ids(campaign: &Campaign) -> Result<(), FormatError> {
    let mut seen = FxHashSet::default();
    let mut duplicates = campaign
        .actions
        .iter()
        .filter(|action| !seen.insert(action.id.as_str()))
        .map(|action| action.id.clone())
        .collect::<Vec<_>>();
    duplicates.sort();
    duplicates.dedup();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1000".to_string(),
            "duplicated action ids".to_string(),
            format!("remove duplicated actions with the following ids: {}", duplicates.join(", ")),
        ))
    }
}

fn read_action(action: &Action) -> Result<CoreAction, FormatError> {
    let start = parse_action_time(action, action.start_time.as_str())?;
    let end = parse_action_time(action, action.end_time.as_str())?;

    CoreAction::try_new(action.id.as_str(), TimeWindow::new(start, end), &action.activity.id, &action.location.id)
        .map_err(|err| {
            FormatError::new_with_details(
                "E1002".to_string(),
                "action ends before it starts".to_string(),
                format!("check start and end time of action '{}'", action.id),
                err.to_string(),
            )
        })
}

fn parse_action_time(action: &Action, time: &str) -> Result<Timestamp, FormatError> {
    parse_time(time).map_err(|err| {
        FormatError::new_with_details(
            "E1001".to_string(),
            "invalid time".to_string(),
            format!("use RFC3339 format for start and end time of action '{}'", action.id),
            err.to_string(),
        )
    })
}

fn get_titles<'a>(references: impl Iterator<Item = &'a Reference>) -> FxHashMap<String, String> {
    references
        .filter_map(|reference| reference.title.as_ref().map(|title| (reference.id.clone(), title.clone())))
        .collect()
}
