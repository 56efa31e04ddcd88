use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the NFL season an undocumented stats/schedule endpoint should cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    #[default]
    Regular,
    Post,
}

impl SeasonType {
    /// The path/query form used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Post => "post",
        }
    }

    /// `Post` when `postseason` is true.
    #[must_use]
    pub const fn from_postseason(postseason: bool) -> Self {
        if postseason { Self::Post } else { Self::Regular }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trending direction for [`crate::SleeperClient::trending_players`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingKind {
    #[default]
    Add,
    Drop,
}

impl TrendingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Drop => "drop",
        }
    }
}

impl fmt::Display for TrendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
