//! Primitive Catalog
//!
//! The fixed set of primitive kinds and the process-wide lookup table used by the
//! parser. The catalog is built once on first access and is read-only afterwards.
//!
//! Legacy spellings are normalized before lookup: `int` and `long` map to
//! `integer`, `bool` to `boolean`, `double` and `real` to `float`.

use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Integer,
    Float,
    String,
    Boolean,
    Mixed,
    Resource,
    Object,
    Null,
    Callable,
}

/// Aliases accepted in annotations, mapped to their kind.
const ALIASES: &[(&str, PrimitiveType)] = &[
    ("int", PrimitiveType::Integer),
    ("bool", PrimitiveType::Boolean),
    ("double", PrimitiveType::Float),
    ("real", PrimitiveType::Float),
    ("long", PrimitiveType::Integer),
];

/// Canonical names and aliases, both mapped to their kind.
static CATALOG: LazyLock<FxHashMap<&'static str, PrimitiveType>> = LazyLock::new(|| {
    let mut catalog = FxHashMap::default();
    for kind in PrimitiveType::ALL {
        catalog.insert(kind.as_str(), *kind);
    }
    for (alias, kind) in ALIASES {
        catalog.insert(*alias, *kind);
    }
    tracing::trace!(entries = catalog.len(), "primitive catalog initialized");
    catalog
});

impl PrimitiveType {
    /// All primitive kinds, in declaration order.
    pub const ALL: &'static [PrimitiveType] = &[
        PrimitiveType::Integer,
        PrimitiveType::Float,
        PrimitiveType::String,
        PrimitiveType::Boolean,
        PrimitiveType::Mixed,
        PrimitiveType::Resource,
        PrimitiveType::Object,
        PrimitiveType::Null,
        PrimitiveType::Callable,
    ];

    /// Returns the canonical name of this primitive kind.
    #[must_use = "returns the string representation without modifying self"]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Integer => "integer",
            PrimitiveType::Float => "float",
            PrimitiveType::String => "string",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Mixed => "mixed",
            PrimitiveType::Resource => "resource",
            PrimitiveType::Object => "object",
            PrimitiveType::Null => "null",
            PrimitiveType::Callable => "callable",
        }
    }

    /// Looks up a primitive kind by name, accepting legacy aliases.
    ///
    /// Returns `None` for anything that is not a primitive, so callers can fall
    /// through to array and object-type parsing. Lookup is case-sensitive.
    #[must_use = "parsing result should be checked; returns None if not a primitive"]
    pub fn parse(name: &str) -> Option<Self> {
        CATALOG.get(name).copied()
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PrimitiveType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}
