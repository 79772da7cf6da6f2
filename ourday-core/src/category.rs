//! Ownership categories and the colors derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OurdayError;

pub const MINE_COLOR: &str = "#FF8FA3";
pub const PARTNER_COLOR: &str = "#7FB5FF";
pub const SHARED_COLOR: &str = "#B49CE0";
pub const HOLIDAY_COLOR: &str = "#FF5A5F";
pub const ANNIVERSARY_COLOR: &str = "#FFB020";

/// Who a schedule belongs to, relative to whoever is looking at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mine,
    Partner,
    Shared,
}

impl Category {
    /// Swap `mine` and `partner`. `shared` has no owner and stays put.
    pub fn inverted(self) -> Self {
        match self {
            Category::Mine => Category::Partner,
            Category::Partner => Category::Mine,
            Category::Shared => Category::Shared,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Mine => MINE_COLOR,
            Category::Partner => PARTNER_COLOR,
            Category::Shared => SHARED_COLOR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mine => "mine",
            Category::Partner => "partner",
            Category::Shared => "shared",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = OurdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mine" => Ok(Category::Mine),
            "partner" => Ok(Category::Partner),
            "shared" => Ok(Category::Shared),
            other => Err(OurdayError::Validation(format!(
                "Unknown category '{}'. Expected mine, partner or shared",
                other
            ))),
        }
    }
}
