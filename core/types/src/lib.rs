//! Structural Type Algebra for Docblock Annotations
//!
//! This crate models the types that documentation comments can express
//! (`int`, `string[]`, `array<string,Foo>`, `Foo|Bar|null`) and answers the
//! questions a dynamic-language tool asks about them.
//!
//! ## Core Features
//!
//! **Type Representation** ([`Type`]):
//! - Primitives: the nine kinds of [`PrimitiveType`], each with its aliases
//! - Arrays: homogeneous key/item containers, invariant in both
//! - Object types: classes and interfaces named by fully-qualified name
//! - Unions: always canonical, so equal unions have equal names
//! - Generic parameters: representable, never assignable
//!
//! **Operations** (all on [`TypeSystem`]):
//! - Parsing annotation text with [`type_of`](TypeSystem::type_of)
//! - Union construction with [`union_of`](TypeSystem::union_of) and
//!   [`nullable_of`](TypeSystem::nullable_of)
//! - Static and runtime assignability, semantic equality
//!
//! **Collaborators**:
//! - [`NameResolver`] expands relative names written in annotations
//! - [`SymbolOracle`] answers class and interface existence and subtyping
//!
//! ## Quick Start
//!
//! ```ignore
//! use doctype_types::{NoSymbols, Type, TypeSystem};
//!
//! let types = TypeSystem::new(&NoSymbols);
//! let ty = types.type_of("int|null|string", None)?;
//! assert_eq!(ty.name(), "integer|string|null");
//! assert!(types.is_assignable_from(&ty, &Type::null()));
//! ```
//!
//! ## Canonical Names
//!
//! Every type has exactly one name. For types without generic parameters,
//! [`TypeSystem::equals`] holds exactly when the names are equal, and parsing a
//! name yields a type equal to the one it was rendered from. Equality checks
//! this correspondence and panics if it ever breaks.
//!
//! ## Public Modules
//!
//! - [`errors`] - [`TypeError`], the construction and parsing failures
//! - [`types`] - the [`Type`] sum and its component types
//! - [`primitive`] - the primitive catalog
//! - [`resolver`] - collaborator traits
//! - [`value`] - runtime values for value-level checks

mod assignability;
pub mod errors;
mod parser;
pub mod primitive;
pub mod resolver;
mod type_system;
pub mod types;
mod union;
pub mod value;

pub use errors::TypeError;
pub use primitive::PrimitiveType;
pub use resolver::{INVOCATION_METHOD, NameResolver, NoSymbols, SymbolOracle};
pub use type_system::{CLOSURE_CLASS, TypeSystem};
pub use types::{ArrayType, GenericParameterType, NAMESPACE_SEPARATOR, ObjectType, Type, UnionType};
pub use value::{ArrayKey, Value};
