//! Admin API version selection.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version.
///
/// Stable versions ship quarterly, so a release is a year plus one of the
/// months 1, 4, 7 or 10. Ordering is chronological with `Unstable` last.
///
/// # Example
///
/// ```rust
/// use shopify_orders::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version.to_string(), "2025-07");
/// assert!(version < ApiVersion::latest());
/// assert!("2025-02".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A quarterly stable release.
    Release {
        /// Four-digit year.
        year: u16,
        /// Release month: 1, 4, 7 or 10.
        month: u8,
    },
    /// The moving `unstable` version.
    Unstable,
}

impl ApiVersion {
    /// Newest stable release this crate's record types were written against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::Release {
            year: 2025,
            month: 10,
        }
    }

    /// Builds a stable release version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if `month` is not a release
    /// month or `year` is not four digits.
    pub fn release(year: u16, month: u8) -> Result<Self, ConfigError> {
        if !(1000..=9999).contains(&year) || !matches!(month, 1 | 4 | 7 | 10) {
            return Err(ConfigError::InvalidApiVersion {
                version: format!("{year}-{month:02}"),
            });
        }
        Ok(Self::Release { year, month })
    }

    /// Returns `true` for dated releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Release { .. })
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release { year, month } => write!(f, "{year}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        let invalid = || ConfigError::InvalidApiVersion { version: s.clone() };
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Self::release(year, month).map_err(|_| invalid())
    }
}
