//! Page selection modes

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{GtinError, Result};

/// Which catalog pages to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// Exactly one page
    Single(u32),
    /// Pages `start..=end`
    Range { start: u32, end: u32 },
    /// Page 1 onwards until the service reports the last page
    Dynamic,
}

impl PageSelection {
    /// Build the selection from the parsed `--page` / `--page-range` flags
    ///
    /// Absence of both selects dynamic mode. A malformed or inverted range
    /// is a configuration error.
    pub fn from_args(page: Option<u32>, page_range: Option<&str>) -> Result<Self> {
        match (page, page_range) {
            (Some(_), Some(_)) => Err(GtinError::Config(
                "--page and --page-range are mutually exclusive".to_string(),
            )),
            (Some(0), None) => Err(GtinError::Config(
                "Page numbers start at 1".to_string(),
            )),
            (Some(page), None) => Ok(Self::Single(page)),
            (None, Some(range)) => Self::parse_range(range),
            (None, None) => Ok(Self::Dynamic),
        }
    }

    fn parse_range(range: &str) -> Result<Self> {
        let invalid = || {
            GtinError::Config(format!(
                "Invalid page range '{}'. Use e.g. --page-range 2-5",
                range
            ))
        };

        let (start, end) = range.split_once('-').ok_or_else(invalid)?;
        let start: u32 = start.trim().parse().map_err(|_| invalid())?;
        let end: u32 = end.trim().parse().map_err(|_| invalid())?;

        if start == 0 || start > end {
            return Err(invalid());
        }

        Ok(Self::Range { start, end })
    }

    /// Page numbers to request, in order
    ///
    /// Dynamic mode yields an unbounded sequence; the fetch loop decides
    /// when to stop.
    pub fn pages(&self) -> RangeInclusive<u32> {
        match *self {
            Self::Single(page) => page..=page,
            Self::Range { start, end } => start..=end,
            Self::Dynamic => 1..=u32::MAX,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(page) => write!(f, "page {}", page),
            Self::Range { start, end } => write!(f, "pages {}-{}", start, end),
            Self::Dynamic => write!(f, "all available pages"),
        }
    }
}
