use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use smol_str::SmolStr;
use std::{cmp::Ordering, convert::Infallible, fmt, str::FromStr};

/// Component value of a version part that does not start with digits.
pub const UNPARSEABLE_COMPONENT: i64 = -1;

/// An ordered sequence of version components, e.g. `64.0.3282` is `[64, 0, 3282]`.
///
/// Versions are compared with [`version_at_least`], which treats
/// missing trailing components as `0`. Parsing never fails: a part
/// without leading digits becomes [`UNPARSEABLE_COMPONENT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version(SmallVec<[i64; 4]>);

impl Version {
    /// Create a [`Version`] from its components.
    pub fn new(components: impl IntoIterator<Item = i64>) -> Self {
        Self(components.into_iter().collect())
    }

    /// Parse a dot-delimited version string.
    ///
    /// Each part is read as a base 10 integer from its leading digits,
    /// ignoring whatever follows them (`"0a1"` is `0`).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(text.split('.').map(parse_component).collect())
    }

    /// The components of this version.
    #[must_use]
    pub fn components(&self) -> &[i64] {
        &self.0
    }

    /// Returns true if this version has no components,
    /// which is what an absent version parses to.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if this version is at least as high as `minimum`.
    #[must_use]
    pub fn at_least(&self, minimum: &Self) -> bool {
        version_at_least(minimum, self)
    }
}

/// Parse an optional version string, an absent version yielding an empty [`Version`].
#[must_use]
pub fn parse_version(text: Option<&str>) -> Version {
    text.map(Version::parse).unwrap_or_default()
}

/// Returns whether `actual` is at least as high as `minimum`.
///
/// Only the components of `minimum` are inspected, in order, and
/// the first one that differs decides. Components absent in `actual` are `0`.
#[must_use]
pub fn version_at_least(minimum: &Version, actual: &Version) -> bool {
    for (index, required) in minimum.0.iter().enumerate() {
        let component = actual.0.get(index).copied().unwrap_or(0);
        match component.cmp(required) {
            Ordering::Greater => return true,
            Ordering::Less => return false,
            Ordering::Equal => (),
        }
    }
    true
}

fn parse_component(part: &str) -> i64 {
    let part = part.trim_start();
    let (negative, digits) = match part.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, part.strip_prefix('+').unwrap_or(part)),
    };

    let mut value = None;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = Some(value.unwrap_or(0_i64).saturating_mul(10).saturating_add(digit));
    }

    match value {
        Some(value) if negative => -value,
        Some(value) => value,
        None => UNPARSEABLE_COMPONENT,
    }
}

impl<const N: usize> From<[i64; N]> for Version {
    fn from(components: [i64; N]) -> Self {
        Self::new(components)
    }
}

impl From<Option<&str>> for Version {
    fn from(text: Option<&str>) -> Self {
        parse_version(text)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.0.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
            for component in components {
                write!(f, ".{component}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
