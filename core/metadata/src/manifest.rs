//! Symbol Manifest
//!
//! The declarations a [`SymbolTable`](crate::SymbolTable) is built from, in the
//! shape they take in a JSON manifest:
//!
//! ```json
//! {
//!   "classes": [
//!     {
//!       "name": "App\\User",
//!       "extends": "App\\Model",
//!       "implements": ["App\\Named"],
//!       "imports": { "Carbon": "Carbon\\Carbon" },
//!       "methods": [{ "name": "rename", "parameters": ["name"], "doc": "/** ... */" }],
//!       "properties": [{ "name": "name", "doc": "/** @var string */" }]
//!     }
//!   ],
//!   "interfaces": [{ "name": "App\\Named", "methods": [{ "name": "name" }] }]
//! }
//! ```
//!
//! Every field except `name` is optional. `imports` maps a local alias, as
//! written in a `use` statement, to the fully-qualified name it stands for.

use rustc_hash::FxHashMap;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolManifest {
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDecl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub imports: FxHashMap<String, String>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceDecl {
    pub name: String,
    #[serde(default)]
    pub extends: Vec<String>,
    #[serde(default)]
    pub imports: FxHashMap<String, String>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,
    /// Parameter names in declaration order, with or without a leading `$`.
    #[serde(default)]
    pub parameters: Vec<String>,
    /// The raw documentation comment, delimiters included.
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
}
