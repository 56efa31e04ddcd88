//! The NFL game schedule (undocumented endpoint).

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        SleeperClient, SleeperError,
        wire::{lenient_i64, null_as_default},
    },
    types::SeasonType,
};

/// Sleeper has schedule data from this season on.
pub const FIRST_SCHEDULE_YEAR: i32 = 2009;

/// One scheduled or completed NFL game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledGame {
    #[serde(deserialize_with = "null_as_default")]
    pub game_id: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub week: Option<i64>,
    /// `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub home: String,
    #[serde(deserialize_with = "null_as_default")]
    pub away: String,
    /// `pre_game`, `in_game` or `complete`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// Checks `year` against the range the schedule endpoint has data for.
pub(crate) fn validate_schedule_year(year: i32, current_year: i32) -> Result<(), SleeperError> {
    if (FIRST_SCHEDULE_YEAR..=current_year).contains(&year) {
        Ok(())
    } else {
        Err(SleeperError::InvalidYear {
            year,
            min: FIRST_SCHEDULE_YEAR,
            max: current_year,
        })
    }
}

impl SleeperClient {
    /// Fetches the NFL schedule for a season.
    /// (GET `/schedule/nfl/<regular|post>/<year>`)
    ///
    /// # Errors
    ///
    /// Returns `SleeperError::InvalidYear`, without making a request, if `year` is
    /// before 2009 or after the current year. Otherwise returns an error if the
    /// request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn nfl_schedule(
        &self,
        year: i32,
        season_type: SeasonType,
    ) -> Result<Vec<ScheduledGame>, SleeperError> {
        validate_schedule_year(year, chrono::Utc::now().year())?;

        let year = year.to_string();
        let url = self.api_url(["schedule", "nfl", season_type.as_str(), year.as_str()])?;
        self.get_json(url, "nfl_schedule").await
    }
}
