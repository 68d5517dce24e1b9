use crate::error::{Result, TagError};
use std::fmt;

/// Number of dot-separated fields in a release tag (`MAJOR.MINOR.PATCH`)
const RELEASE_FIELDS: usize = 3;

/// GA release version.
///
/// MAJOR and PATCH are kept as written, so a prefixed tag like "v1.2.3"
/// bumps to "v1.3.0". Only MINOR is numeric; a bump resets PATCH to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub major: String,
    pub minor: u64,
    pub patch: String,
}

impl ReleaseTag {
    pub fn new(major: impl Into<String>, minor: u64, patch: impl Into<String>) -> Self {
        ReleaseTag {
            major: major.into(),
            minor,
            patch: patch.into(),
        }
    }

    /// Parse a release tag such as "1.2.3".
    ///
    /// The patch field only has to be present; its content never survives
    /// a bump, so it is not validated. MINOR is unsigned: "1.-1.0" is
    /// rejected rather than bumped to "1.0.0".
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split('.').collect();
        if parts.len() != RELEASE_FIELDS {
            return Err(TagError::invalid_format(format!(
                "'{}' - expected MAJOR.MINOR.PATCH",
                tag
            )));
        }

        let minor = parts[1].parse::<u64>().map_err(|_| {
            TagError::invalid_format(format!("minor version is not a number: '{}'", parts[1]))
        })?;

        Ok(ReleaseTag {
            major: parts[0].to_string(),
            minor,
            patch: parts[2].to_string(),
        })
    }

    /// Next GA release: MINOR + 1, PATCH reset
    pub fn bump(&self) -> Result<Self> {
        let minor = self.minor.checked_add(1).ok_or_else(|| {
            TagError::invalid_format(format!("minor version overflow at {}", self.minor))
        })?;
        Ok(ReleaseTag {
            major: self.major.clone(),
            minor,
            patch: "0".to_string(),
        })
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_parse() {
        let v = ReleaseTag::parse("1.2.3").unwrap();
        assert_eq!(v, ReleaseTag::new("1", 2, "3"));
    }

    #[test]
    fn test_release_bump_minor_resets_patch() {
        let bumped = ReleaseTag::parse("1.2.3").unwrap().bump().unwrap();
        assert_eq!(bumped.to_string(), "1.3.0");
    }

    #[test]
    fn test_release_bump_keeps_major_verbatim() {
        let bumped = ReleaseTag::parse("v0.9.14").unwrap().bump().unwrap();
        assert_eq!(bumped.to_string(), "v0.10.0");
    }

    #[test]
    fn test_release_parse_wrong_field_count() {
        for tag in ["", "1.2", "1.2.3.4", "dev.1"] {
            assert!(
                ReleaseTag::parse(tag).unwrap_err().is_invalid_format(),
                "{} should be rejected",
                tag
            );
        }
    }

    #[test]
    fn test_release_parse_non_numeric_minor() {
        assert!(ReleaseTag::parse("1.x.3").unwrap_err().is_invalid_format());
        assert!(ReleaseTag::parse("1..3").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_release_parse_negative_minor() {
        assert!(ReleaseTag::parse("1.-1.0").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_release_patch_not_validated() {
        let bumped = ReleaseTag::parse("2.4.rc1").unwrap().bump().unwrap();
        assert_eq!(bumped.to_string(), "2.5.0");
    }

    #[test]
    fn test_release_bump_overflow() {
        let tag = ReleaseTag::new("1", u64::MAX, "0");
        assert!(tag.bump().unwrap_err().is_invalid_format());
    }
}
