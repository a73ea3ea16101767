//! Specifies logic to write a grouped schedule in pragmatic json format.

use crate::format::campaign::CampaignContext;
use campaign_core::models::Schedule as CoreSchedule;
use campaign_core::utils::GenericResult;
use std::io::{BufWriter, Write};
use time::UtcOffset;

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::create_pragmatic_schedule;

/// A trait to serialize schedule in pragmatic format.
pub trait PragmaticSchedule {
    /// Serializes schedule in pragmatic json format. Times of day are observed with given
    /// display offset.
    fn write_pragmatic<W: Write>(
        &self,
        context: &CampaignContext,
        offset: UtcOffset,
        writer: BufWriter<W>,
    ) -> GenericResult<()>;
}

impl PragmaticSchedule for CoreSchedule {
    fn write_pragmatic<W: Write>(
        &self,
        context: &CampaignContext,
        offset: UtcOffset,
        mut writer: BufWriter<W>,
    ) -> GenericResult<()> {
        let schedule = create_pragmatic_schedule(self, context, offset)?;

        serialize_schedule(&schedule, &mut writer).map_err(|err| format!("cannot write schedule: '{err}'"))?;
        writer.flush()?;

        Ok(())
    }
}
