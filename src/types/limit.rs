//! Result count limits.

use std::fmt;
use std::str::FromStr;

use crate::{QuietHnError, Result};

/// How many qualifying stories the collector forwards.
///
/// On the command line and in config files this is an integer where `-1`
/// means "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Forward everything the source produces.
    Unbounded,
    /// Forward at most this many items.
    AtMost(usize),
}

impl Limit {
    /// Whether `taken` items already satisfy the limit.
    pub fn is_reached(&self, taken: usize) -> bool {
        match self {
            Limit::Unbounded => false,
            Limit::AtMost(n) => taken >= *n,
        }
    }

    /// Initial capacity hint for a collection bounded by this limit.
    pub fn capacity_hint(&self) -> usize {
        match self {
            Limit::Unbounded => 0,
            Limit::AtMost(n) => *n,
        }
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit::AtMost(30)
    }
}

impl TryFrom<i64> for Limit {
    type Error = QuietHnError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(Limit::Unbounded),
            n if n >= 0 => Ok(Limit::AtMost(n as usize)),
            n => Err(QuietHnError::InvalidInput(format!(
                "story count must be -1 (unbounded) or non-negative, got {n}"
            ))),
        }
    }
}

impl FromStr for Limit {
    type Err = QuietHnError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|e| QuietHnError::InvalidInput(format!("invalid story count {s:?}: {e}")))?;
        Limit::try_from(value)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unbounded => write!(f, "-1"),
            Limit::AtMost(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_unbounded() {
        assert_eq!(Limit::try_from(-1).unwrap(), Limit::Unbounded);
        assert_eq!("-1".parse::<Limit>().unwrap(), Limit::Unbounded);
    }

    #[test]
    fn other_negatives_are_rejected() {
        assert!(Limit::try_from(-2).is_err());
        assert!("-30".parse::<Limit>().is_err());
        assert!("thirty".parse::<Limit>().is_err());
    }

    #[test]
    fn display_matches_cli_form() {
        assert_eq!(Limit::Unbounded.to_string(), "-1");
        assert_eq!(Limit::AtMost(30).to_string(), "30");
    }

    #[test]
    fn reached() {
        assert!(Limit::AtMost(0).is_reached(0));
        assert!(!Limit::AtMost(3).is_reached(2));
        assert!(Limit::AtMost(3).is_reached(3));
        assert!(!Limit::Unbounded.is_reached(usize::MAX));
    }
}
