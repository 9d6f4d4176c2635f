use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use doctype_types::TypeError;
use thiserror::Error;

/// Kind of a registered symbol, for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Class,
    Interface,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Class => write!(f, "class"),
            SymbolKind::Interface => write!(f, "interface"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{kind} `{name}` is already registered")]
    DuplicateSymbol { kind: SymbolKind, name: String },

    #[error("type `{name}` is not registered")]
    UnknownSymbol { name: String },

    #[error("`{owner}` has no member `{member}`")]
    UnknownMember { owner: String, member: String },

    #[error("`{name}` refers to {expected} `{supertype}`, which is not registered")]
    UnknownSupertype {
        name: String,
        supertype: String,
        expected: SymbolKind,
    },

    #[error("inheritance of `{name}` is cyclic")]
    InheritanceCycle { name: String },

    #[error("invalid symbol manifest")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to read symbol manifest `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Type(#[from] TypeError),
}
