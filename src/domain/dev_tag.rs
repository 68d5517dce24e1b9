use crate::error::{Result, TagError};
use std::fmt;

/// Prefix written in front of every dev counter
pub const DEV_PREFIX: &str = "dev";

/// Number of dot-separated fields in a dev tag (`dev.N`)
const DEV_FIELDS: usize = 2;

/// Interim release-candidate build counter (`dev.N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DevTag {
    pub build: u64,
}

impl DevTag {
    pub fn new(build: u64) -> Self {
        DevTag { build }
    }

    /// Value a dev marker is reset to after a GA release
    pub fn baseline() -> Self {
        DevTag { build: 1 }
    }

    /// Parse a dev tag such as "dev.3".
    ///
    /// The prefix field is not checked; only the field count and the
    /// numeric counter are. Output always uses the `dev` prefix.
    ///
    /// The counter is unsigned: "dev.-1" is rejected rather than bumped
    /// to "dev.0".
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split('.').collect();
        if parts.len() != DEV_FIELDS {
            return Err(TagError::invalid_format(format!(
                "'{}' - expected dev.N",
                tag
            )));
        }

        let build = parts[1].parse::<u64>().map_err(|_| {
            TagError::invalid_format(format!("dev counter is not a number: '{}'", parts[1]))
        })?;

        Ok(DevTag { build })
    }

    /// Next release-candidate counter
    pub fn bump(&self) -> Result<Self> {
        let build = self.build.checked_add(1).ok_or_else(|| {
            TagError::invalid_format(format!("dev counter overflow at {}", self.build))
        })?;
        Ok(DevTag { build })
    }
}

impl fmt::Display for DevTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", DEV_PREFIX, self.build)
    }
}
