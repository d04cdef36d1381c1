//! `major.minor.patch` versions as published in the releases `VERSION` file.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTriplet {
    major: u64,
    minor: u64,
    patch: u64,
}

impl VersionTriplet {
    /// Accepts an optional `v` prefix and ignores a `-prerelease` suffix.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().trim_start_matches('v');
        let core = normalized
            .split_once('-')
            .map_or(normalized, |(head, _)| head);
        let mut parts = core.split('.');

        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next()?.parse().ok()?;

        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            major,
            minor,
            patch,
        })
    }

    /// The version this binary was built as.
    pub fn current() -> Option<Self> {
        Self::parse(env!("CARGO_PKG_VERSION"))
    }
}

impl fmt::Display for VersionTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u64, minor: u64, patch: u64) -> VersionTriplet {
        VersionTriplet {
            major,
            minor,
            patch,
        }
    }

    #[test]
    fn test_parses_with_or_without_v_prefix() {
        assert_eq!(VersionTriplet::parse("v0.4.1"), Some(v(0, 4, 1)));
        assert_eq!(VersionTriplet::parse("0.4.1\n"), Some(v(0, 4, 1)));
        assert_eq!(VersionTriplet::parse("1.2.3-rc.1"), Some(v(1, 2, 3)));
    }

    #[test]
    fn test_rejects_invalid_shapes() {
        assert_eq!(VersionTriplet::parse("0.4"), None);
        assert_eq!(VersionTriplet::parse("v0.4.1.0"), None);
        assert_eq!(VersionTriplet::parse("latest"), None);
    }

    #[test]
    fn test_orders_numerically() {
        assert!(v(0, 10, 0) > v(0, 9, 9));
        assert!(v(1, 0, 0) > v(0, 99, 99));
        assert_eq!(v(0, 3, 0).to_string(), "0.3.0");
    }

    #[test]
    fn test_current_version_is_valid() {
        assert!(VersionTriplet::current().is_some());
    }
}
