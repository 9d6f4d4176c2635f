//! Import-Alias Name Resolution
//!
//! Relative names in a docblock are written from the point of view of the file
//! that declares the type: they may start with an alias introduced by a `use`
//! statement, or otherwise live in the declaring type's namespace.

use anyhow::bail;
use doctype_types::{NAMESPACE_SEPARATOR, NameResolver};
use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;

/// Resolves relative names against the imports of one declaring type.
///
/// The first identifier segment of a name is matched case-insensitively against
/// the import aliases. On a hit the alias is replaced by its target; otherwise
/// the name is placed in the declaring type's namespace.
#[derive(Debug)]
pub struct ImportResolver {
    declaring_type: String,
    imports: FxHashMap<String, String>,
    /// ASCII-lowercased alias to fully-qualified target, built on first resolution.
    aliases: OnceCell<FxHashMap<String, String>>,
}

impl ImportResolver {
    #[must_use]
    pub fn new(declaring_type: &str, imports: FxHashMap<String, String>) -> Self {
        Self {
            declaring_type: declaring_type.trim_start_matches(NAMESPACE_SEPARATOR).to_string(),
            imports,
            aliases: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The namespace of the declaring type, empty for the global namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.declaring_type
            .rfind(NAMESPACE_SEPARATOR)
            .map_or("", |idx| &self.declaring_type[..idx])
    }

    fn aliases(&self) -> &FxHashMap<String, String> {
        self.aliases.get_or_init(|| {
            tracing::debug!(
                declaring_type = %self.declaring_type,
                imports = self.imports.len(),
                "building import alias table"
            );
            self.imports
                .iter()
                .map(|(alias, target)| {
                    (
                        alias.to_ascii_lowercase(),
                        target.trim_start_matches(NAMESPACE_SEPARATOR).to_string(),
                    )
                })
                .collect()
        })
    }
}

impl NameResolver for ImportResolver {
    fn resolve(&self, short_name: &str) -> anyhow::Result<String> {
        let split = short_name
            .find(NAMESPACE_SEPARATOR)
            .unwrap_or(short_name.len());
        let (first, remainder) = short_name.split_at(split);
        if first.is_empty() {
            bail!("`{short_name}` does not start with an identifier");
        }

        if let Some(target) = self.aliases().get(&first.to_ascii_lowercase()) {
            return Ok(format!("{target}{remainder}"));
        }
        let namespace = self.namespace();
        if namespace.is_empty() {
            Ok(short_name.to_string())
        } else {
            Ok(format!("{namespace}{NAMESPACE_SEPARATOR}{short_name}"))
        }
    }
}
