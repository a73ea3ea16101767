//! Specifies logic to read campaign definition from json input.

use crate::format::MultiFormatError;
use campaign_core::models::Action as CoreAction;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io::{BufReader, Read};

mod model;
pub use self::model::*;

mod reader;
use self::reader::map_to_context;

/// Keeps campaign actions together with information needed to present them to the user.
#[derive(Clone, Debug)]
pub struct CampaignContext {
    /// Campaign actions in the input order.
    pub actions: Vec<CoreAction>,
    activity_titles: FxHashMap<String, String>,
    location_titles: FxHashMap<String, String>,
    booked: FxHashSet<String>,
    responded: FxHashSet<String>,
}

impl CampaignContext {
    /// Checks whether the user is booked on the action with given id.
    pub fn is_booked(&self, action_id: &str) -> bool {
        self.booked.contains(action_id)
    }

    /// Checks whether the user has responded to the action with given id.
    pub fn is_responded(&self, action_id: &str) -> bool {
        self.responded.contains(action_id)
    }

    /// Returns activity title if it is known.
    pub fn activity_title(&self, activity_id: &str) -> Option<&str> {
        self.activity_titles.get(activity_id).map(|title| title.as_str())
    }

    /// Returns location title if it is known.
    pub fn location_title(&self, location_id: &str) -> Option<&str> {
        self.location_titles.get(location_id).map(|title| title.as_str())
    }
}

/// Reads campaign definition from various sources.
pub trait PragmaticCampaign {
    /// Reads campaign defined in pragmatic format.
    fn read_pragmatic(self) -> Result<CampaignContext, MultiFormatError>;
}

impl<R: Read> PragmaticCampaign for BufReader<R> {
    fn read_pragmatic(self) -> Result<CampaignContext, MultiFormatError> {
        deserialize_campaign(self).and_then(map_to_context)
    }
}

impl PragmaticCampaign for String {
    fn read_pragmatic(self) -> Result<CampaignContext, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticCampaign for Campaign {
    fn read_pragmatic(self) -> Result<CampaignContext, MultiFormatError> {
        map_to_context(self)
    }
}
