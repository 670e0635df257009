use ahash::HashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;
use std::{convert::Infallible, fmt, str::FromStr};

/// A named web platform feature whose availability gates
/// which build a client may receive.
///
/// Names are matched case-sensitively. Any name outside the known
/// vocabulary is kept as [`Capability::Unknown`]: it weighs nothing
/// when ranking builds, yet still has to be present in the client set
/// for a build requiring it to be served.
///
/// Always create capabilities from their name (using [`From`] or [`FromStr`])
/// rather than constructing [`Capability::Unknown`] by hand, such that known
/// names map to their dedicated variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// `push`: HTTP/2 server push.
    Push,
    /// `serviceworker`: service workers.
    ServiceWorker,
    /// `es2015`: ECMAScript 2015 (ES6).
    Es2015,
    /// `es2016`: ECMAScript 2016.
    Es2016,
    /// `es2017`: ECMAScript 2017.
    Es2017,
    /// `es2018`: ECMAScript 2018.
    Es2018,
    /// `modules`: JavaScript modules (`<script type="module">`).
    Modules,
    /// A capability name outside the known vocabulary.
    Unknown(SmolStr),
}

impl Capability {
    /// All known capabilities, in their natural order.
    pub const KNOWN: [Self; 7] = [
        Self::Push,
        Self::ServiceWorker,
        Self::Es2015,
        Self::Es2016,
        Self::Es2017,
        Self::Es2018,
        Self::Modules,
    ];

    /// The weight of this capability, used only to rank builds.
    #[must_use]
    pub fn weight(&self) -> u32 {
        match self {
            Self::Push | Self::Unknown(_) => 0,
            Self::ServiceWorker => 1,
            Self::Es2015 => 2,
            Self::Es2016 => 3,
            Self::Es2017 => 4,
            Self::Es2018 | Self::Modules => 5,
        }
    }

    /// The (manifest) name of this capability.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Push => "push",
            Self::ServiceWorker => "serviceworker",
            Self::Es2015 => "es2015",
            Self::Es2016 => "es2016",
            Self::Es2017 => "es2017",
            Self::Es2018 => "es2018",
            Self::Modules => "modules",
            Self::Unknown(name) => name.as_str(),
        }
    }

    /// Returns true if this capability is part of the known vocabulary.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for Capability {
    fn from(name: &str) -> Self {
        match name {
            "push" => Self::Push,
            "serviceworker" => Self::ServiceWorker,
            "es2015" => Self::Es2015,
            "es2016" => Self::Es2016,
            "es2017" => Self::Es2017,
            "es2018" => Self::Es2018,
            "modules" => Self::Modules,
            other => Self::Unknown(SmolStr::new(other)),
        }
    }
}

impl From<String> for Capability {
    fn from(name: String) -> Self {
        name.as_str().into()
    }
}

impl FromStr for Capability {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = SmolStr::deserialize(deserializer)?;
        Ok(name.as_str().into())
    }
}

/// The set of capabilities a client supports.
///
/// Computed once per request, it has no ordering significance.
/// It serializes as a list sorted in the natural capability order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientCapabilitySet(HashSet<Capability>);

impl ClientCapabilitySet {
    /// Create an empty [`ClientCapabilitySet`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a capability, returning true if it was not yet present.
    pub fn insert(&mut self, capability: Capability) -> bool {
        self.0.insert(capability)
    }

    /// Add a capability to the set.
    #[must_use]
    pub fn with(mut self, capability: impl Into<Capability>) -> Self {
        self.0.insert(capability.into());
        self
    }

    /// Returns true if the client supports the given capability.
    #[must_use]
    pub fn contains(&self, capability: &Capability) -> bool {
        self.0.contains(capability)
    }

    /// Returns true if the client supports every one of the given capabilities.
    pub fn contains_all<'a>(&self, capabilities: impl IntoIterator<Item = &'a Capability>) -> bool {
        capabilities
            .into_iter()
            .all(|capability| self.0.contains(capability))
    }

    /// Number of capabilities in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the client supports no capability at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the capabilities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.0.iter()
    }

    /// The capabilities sorted in their natural order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<&Capability> {
        let mut capabilities: Vec<_> = self.0.iter().collect();
        capabilities.sort_unstable();
        capabilities
    }
}

impl FromIterator<Capability> for ClientCapabilitySet {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Capability> for ClientCapabilitySet {
    fn extend<T: IntoIterator<Item = Capability>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ClientCapabilitySet {
    type Item = &'a Capability;
    type IntoIter = std::collections::hash_set::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ClientCapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, capability) in self.to_sorted_vec().into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{capability}")?;
        }
        Ok(())
    }
}

impl Serialize for ClientCapabilitySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.to_sorted_vec())
    }
}

impl<'de> Deserialize<'de> for ClientCapabilitySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let capabilities = Vec::<Capability>::deserialize(deserializer)?;
        Ok(capabilities.into_iter().collect())
    }
}
