use std::fmt;

use smol_str::SmolStr;

/// Identity of a type in the scripting surface.
///
/// Static API types use their declared name (`DB`, `Collection`); shapes
/// observed at runtime use whatever key the host session picks for them.
/// Cloning is cheap: short names are stored inline.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeId(SmolStr);

impl TypeId {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Type id of a nested shape found under `field` of this type.
    pub fn nested(&self, field: &str) -> Self {
        Self(smol_str::format_smolstr!("{}.{}", self.0, field))
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeId {
    fn from(name: String) -> Self {
        Self(SmolStr::from(name))
    }
}
