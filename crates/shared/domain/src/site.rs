use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable numeric identifier of a network site.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SiteId(pub u64);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SiteId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for SiteId {
    type Err = ParseIntError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse().map(Self)
    }
}

/// A network site a request can be attributed to.
///
/// `domain` is kept verbatim as configured; it may be a full URL
/// (`https://www.example.org`) or a bare authority (`www.example.org`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub domain: String,
}

impl Site {
    pub fn new(id: impl Into<SiteId>, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), domain: domain.into() }
    }
}
