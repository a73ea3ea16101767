#[cfg(test)]
#[path = "../../../tests/unit/format/schedule/writer_test.rs"]
mod writer_test;

use super::*;
use crate::{format_time, to_offset_time};
use campaign_core::models::common::DayIndex;
use campaign_core::models::{Action as CoreAction, Day as CoreDay, Group as CoreGroup, GroupKind};
use campaign_core::utils::GenericError;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Creates a pragmatic schedule from the core one.
pub fn create_pragmatic_schedule(
    schedule: &CoreSchedule,
    context: &CampaignContext,
    offset: UtcOffset,
) -> GenericResult<Schedule> {
    let days = schedule.days.iter().map(|day| create_day(day, context, offset)).collect::<GenericResult<Vec<_>>>()?;

    Ok(Schedule { days })
}

fn create_day(day: &CoreDay, context: &CampaignContext, offset: UtcOffset) -> GenericResult<Day> {
    let key = get_day_date(day.index)?
        .format(format_description!("[year][month][day]"))
        .map_err(|err| GenericError::from(format!("cannot format day key: '{err}'")))?;

    // NOTE date label is taken from the first action of the day
    let first_start = day.groups.first().map(|group| group.first().time.start).unwrap_or_default();
    let date = to_offset_time(first_start, offset)?
        .format(format_description!("[day]/[month]"))
        .map_err(|err| GenericError::from(format!("cannot format day date: '{err}'")))?;

    let groups = day.groups.iter().map(|group| create_group(group, context)).collect::<GenericResult<Vec<_>>>()?;

    Ok(Day { key, date, groups })
}

fn create_group(group: &CoreGroup, context: &CampaignContext) -> GenericResult<Group> {
    let type_field = match group.kind() {
        GroupKind::Single => GroupType::Single,
        GroupKind::Shifts => GroupType::Shifts,
        GroupKind::Parallel => GroupType::Parallel,
    };

    Ok(Group {
        type_field,
        activity: group.activity().to_string(),
        location: group.location().map(|location| location.to_string()),
        start_time: format_time(group.time().start)?,
        end_time: format_time(group.time().end)?,
        actions: group
            .actions()
            .iter()
            .map(|action| create_scheduled_action(action, context))
            .collect::<GenericResult<Vec<_>>>()?,
    })
}

fn create_scheduled_action(action: &CoreAction, context: &CampaignContext) -> GenericResult<ScheduledAction> {
    Ok(ScheduledAction {
        id: action.id.clone(),
        start_time: format_time(action.time.start)?,
        end_time: format_time(action.time.end)?,
        activity: action.activity.clone(),
        location: action.location.clone(),
        booked: context.is_booked(action.id.as_str()),
        responded: context.is_responded(action.id.as_str()),
    })
}

fn get_day_date(index: DayIndex) -> GenericResult<Date> {
    i32::try_from(index)
        .ok()
        .and_then(|index| OffsetDateTime::UNIX_EPOCH.date().to_julian_day().checked_add(index))
        .and_then(|julian_day| Date::from_julian_day(julian_day).ok())
        .ok_or_else(|| format!("day index is out of range: {index}").into())
}
