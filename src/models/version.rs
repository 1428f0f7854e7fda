use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::services::version_parser::{self, ParseError};

/// The canonical (major, minor, patch) triple behind every [`Version`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VersionComponents {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionComponents {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Returns the components as a `(major, minor, patch)` tuple
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

/// Which component of a version an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentPosition {
    Major,
    Minor,
    Patch,
}

impl ComponentPosition {
    const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];
}

impl fmt::Display for ComponentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
        }
    }
}

/// Errors raised when building a version from raw integers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// A signed input component was below zero
    #[error("{position} version must not be negative (got {value})")]
    NegativeComponent {
        position: ComponentPosition,
        value: i64,
    },

    /// Incrementing a component would exceed the integer range
    #[error("{position} version {value} cannot be incremented")]
    ComponentOverflow {
        position: ComponentPosition,
        value: u64,
    },
}

/// A three-component version number.
///
/// Versions are plain values: they are never mutated after construction, and
/// "bumping" one returns a new `Version`. Equality and ordering compare major,
/// then minor, then patch.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Version {
    components: VersionComponents,
}

impl Version {
    /// Create a version from components that are already known to be valid
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            components: VersionComponents::new(major, minor, patch),
        }
    }

    /// Create a version from signed integers, rejecting negative values
    pub fn from_components(major: i64, minor: i64, patch: i64) -> Result<Self, ConstructionError> {
        Self::from_tuple(&[major, minor, patch])
    }

    /// Create a version from up to three integers.
    ///
    /// Missing trailing entries default to zero and entries past the third
    /// are ignored.
    pub fn from_tuple(values: &[i64]) -> Result<Self, ConstructionError> {
        let mut components = [0u64; 3];
        for ((slot, &value), position) in components
            .iter_mut()
            .zip(values)
            .zip(ComponentPosition::ALL)
        {
            *slot = u64::try_from(value)
                .map_err(|_| ConstructionError::NegativeComponent { position, value })?;
        }

        let [major, minor, patch] = components;
        Ok(Self::new(major, minor, patch))
    }

    /// Parse a version string such as `"1.2.8"`
    pub fn from_string(text: &str) -> Result<Self, ParseError> {
        version_parser::parse(text).map(Self::from)
    }

    pub const fn major(&self) -> u64 {
        self.components.major
    }

    pub const fn minor(&self) -> u64 {
        self.components.minor
    }

    pub const fn patch(&self) -> u64 {
        self.components.patch
    }

    pub const fn components(&self) -> VersionComponents {
        self.components
    }

    /// Returns the next patch release, e.g. `1.2.8` -> `1.2.9`
    pub fn bump_patch(&self) -> Result<Self, ConstructionError> {
        let patch = increment(ComponentPosition::Patch, self.patch())?;
        Ok(Self::new(self.major(), self.minor(), patch))
    }

    /// Returns the next minor release, e.g. `1.2.8` -> `1.3.0`
    pub fn bump_minor(&self) -> Result<Self, ConstructionError> {
        let minor = increment(ComponentPosition::Minor, self.minor())?;
        Ok(Self::new(self.major(), minor, 0))
    }

    /// Returns the next major release, e.g. `1.2.8` -> `2.0.0`
    pub fn bump_major(&self) -> Result<Self, ConstructionError> {
        let major = increment(ComponentPosition::Major, self.major())?;
        Ok(Self::new(major, 0, 0))
    }
}

fn increment(position: ComponentPosition, value: u64) -> Result<u64, ConstructionError> {
    value
        .checked_add(1)
        .ok_or(ConstructionError::ComponentOverflow { position, value })
}

/// Three-way comparison of two versions
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Three-way comparison as an integer: `1` if `a` is newer, `0` if equal, `-1` if older
pub fn compare_versions(a: &Version, b: &Version) -> i8 {
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components
            .as_tuple()
            .cmp(&other.components.as_tuple())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<VersionComponents> for Version {
    fn from(components: VersionComponents) -> Self {
        Self { components }
    }
}

impl TryFrom<(i64, i64, i64)> for Version {
    type Error = ConstructionError;

    fn try_from((major, minor, patch): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::from_components(major, minor, patch)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_string(text)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({}, {}, {})", self.major(), self.minor(), self.patch())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_string(&text).map_err(serde::de::Error::custom)
    }
}
