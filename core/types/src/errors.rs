use thiserror::Error;

/// Errors raised while constructing types.
///
/// Parsing and construction failures surface immediately; the type system never
/// substitutes a fallback type. A divergence between equality and name equality
/// is not represented here: it is a bug in the algebra and panics instead.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("malformed type annotation `{text}`: {reason}")]
    Malformed { text: String, reason: String },

    #[error("type `{name}` does not exist")]
    UnknownSymbol { name: String },

    #[error("union type must contain at least one type")]
    EmptyUnion,

    #[error("`{name}` does not describe a class or interface")]
    NotAnObjectType { name: String },

    #[error("`{name}` does not describe a class")]
    NotAClass { name: String },

    #[error("`{name}` does not describe an interface")]
    NotAnInterface { name: String },

    #[error("failed to resolve type name `{name}`")]
    Resolution {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl TypeError {
    pub(crate) fn malformed(text: &str, reason: impl Into<String>) -> Self {
        TypeError::Malformed {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
