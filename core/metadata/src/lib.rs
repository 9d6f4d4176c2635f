//! Symbol Metadata
//!
//! Connects the type algebra of `doctype-types` to declarations. A
//! [`SymbolTable`] holds classes and interfaces loaded from a JSON manifest and
//! answers the [`SymbolOracle`](doctype_types::SymbolOracle) queries. Members of
//! registered types expose their documentation and annotated types:
//!
//! ```ignore
//! use doctype_metadata::SymbolTable;
//! use doctype_types::TypeSystem;
//!
//! let table = SymbolTable::load(Path::new("symbols.json"))?;
//! let types = TypeSystem::new(&table);
//! let method = table.method("App\\User", "rename")?;
//! println!("{}", method.description());
//! for param in method.parameters() {
//!     println!("${}: {}", param.name(), param.ty(&types)?);
//! }
//! ```
//!
//! Relative names in docblocks are expanded by the [`ImportResolver`] of the
//! declaring type, using its `use` aliases and namespace.

pub mod docblock;
pub mod errors;
mod import_resolver;
pub mod manifest;
mod member_info;
mod symbol_table;

pub use docblock::DocBlock;
pub use errors::{MetadataError, SymbolKind};
pub use import_resolver::ImportResolver;
pub use manifest::{ClassDecl, InterfaceDecl, MethodDecl, PropertyDecl, SymbolManifest};
pub use member_info::{MethodInfo, ParameterInfo, PropertyInfo, ResultInfo};
pub use symbol_table::SymbolTable;
