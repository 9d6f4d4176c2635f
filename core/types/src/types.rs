//! Type Representation
//!
//! [`Type`] is a closed sum over the six kinds of types an annotation can denote:
//!
//! - [`Type::Primitive`] - one of the nine [`PrimitiveType`] kinds
//! - [`Type::Array`] - a homogeneous container with a key and an item type
//! - [`Type::Class`] / [`Type::Interface`] - object types named by their
//!   fully-qualified name
//! - [`Type::Union`] - a canonical, subsumption-free set of member types
//! - [`Type::GenericParameter`] - parsed for completeness, never assignable
//!
//! Values are immutable once built. Children are shared through [`Arc`], so
//! cloning a type never copies its structure.
//!
//! Object types and unions can only be obtained through
//! [`TypeSystem`](crate::TypeSystem), which checks symbol existence and
//! canonicalizes union members. Derived equality is structural; semantic
//! equality is [`TypeSystem::equals`](crate::TypeSystem::equals).

use core::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::primitive::PrimitiveType;

/// Separator between namespace segments of an object type name.
pub const NAMESPACE_SEPARATOR: char = '\\';

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum Type {
    Primitive(PrimitiveType),
    Array(ArrayType),
    Class(ObjectType),
    Interface(ObjectType),
    Union(UnionType),
    GenericParameter(GenericParameterType),
}

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct ArrayType {
    key: Arc<Type>,
    item: Arc<Type>,
}

impl ArrayType {
    #[must_use]
    pub fn key_type(&self) -> &Type {
        &self.key
    }

    #[must_use]
    pub fn item_type(&self) -> &Type {
        &self.item
    }
}

/// A class or interface, identified by its fully-qualified name.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct ObjectType {
    name: Arc<str>,
}

impl ObjectType {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
        }
    }

    /// The fully-qualified name, without a leading namespace separator.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace part of the name, empty for the global namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.name
            .rfind(NAMESPACE_SEPARATOR)
            .map_or("", |idx| &self.name[..idx])
    }
}

/// Member list of a canonical union.
///
/// Invariants: at least two members, no nested unions, no member assignable
/// from another member, members in canonical order.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct UnionType {
    members: Arc<[Type]>,
}

impl UnionType {
    pub(crate) fn new(members: Vec<Type>) -> Self {
        debug_assert!(members.len() > 1, "unions hold at least two members");
        debug_assert!(
            !members.iter().any(|m| matches!(m, Type::Union(_))),
            "unions are never nested"
        );
        Self {
            members: members.into(),
        }
    }

    #[must_use]
    pub fn members(&self) -> &[Type] {
        &self.members
    }
}

/// A type parameter of a generic declaration.
///
/// Generic user types are not supported: a generic parameter is never assignable
/// from anything, itself included.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct GenericParameterType {
    name: Arc<str>,
    declaring_type: Arc<Type>,
}

impl GenericParameterType {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn declaring_type(&self) -> &Type {
        &self.declaring_type
    }

    #[must_use]
    pub fn is_covariant(&self) -> bool {
        false
    }

    #[must_use]
    pub fn is_contravariant(&self) -> bool {
        false
    }

    #[must_use]
    pub fn is_invariant(&self) -> bool {
        !self.is_covariant() && !self.is_contravariant()
    }
}

impl Type {
    #[must_use]
    pub fn integer() -> Self {
        Type::Primitive(PrimitiveType::Integer)
    }

    #[must_use]
    pub fn float() -> Self {
        Type::Primitive(PrimitiveType::Float)
    }

    #[must_use]
    pub fn string() -> Self {
        Type::Primitive(PrimitiveType::String)
    }

    #[must_use]
    pub fn boolean() -> Self {
        Type::Primitive(PrimitiveType::Boolean)
    }

    #[must_use]
    pub fn mixed() -> Self {
        Type::Primitive(PrimitiveType::Mixed)
    }

    #[must_use]
    pub fn resource() -> Self {
        Type::Primitive(PrimitiveType::Resource)
    }

    #[must_use]
    pub fn object() -> Self {
        Type::Primitive(PrimitiveType::Object)
    }

    #[must_use]
    pub fn null() -> Self {
        Type::Primitive(PrimitiveType::Null)
    }

    #[must_use]
    pub fn callable() -> Self {
        Type::Primitive(PrimitiveType::Callable)
    }

    /// An array with `mixed` keys and the given item type.
    #[must_use]
    pub fn array_of(item: Type) -> Self {
        Self::array(Type::mixed(), item)
    }

    #[must_use]
    pub fn array(key: Type, item: Type) -> Self {
        Type::Array(ArrayType {
            key: Arc::new(key),
            item: Arc::new(item),
        })
    }

    #[must_use]
    pub fn generic_parameter(name: &str, declaring_type: Type) -> Self {
        Type::GenericParameter(GenericParameterType {
            name: Arc::from(name),
            declaring_type: Arc::new(declaring_type),
        })
    }

    /// Returns the canonical name of this type.
    ///
    /// Two supported types are equal exactly when their names are equal, and
    /// every name re-parses to the type it was rendered from.
    #[must_use = "returns the name without modifying self"]
    pub fn name(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        if let Type::Primitive(kind) = self {
            Some(*kind)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayType> {
        if let Type::Array(array) = self {
            Some(array)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Type::Union(union) = self {
            Some(union)
        } else {
            None
        }
    }

    /// The fully-qualified name if this is a class or interface.
    #[must_use]
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Type::Class(object) | Type::Interface(object) => Some(object.name()),
            _ => None,
        }
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_object_type(&self) -> bool {
        matches!(self, Type::Class(_) | Type::Interface(_))
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_null(&self) -> bool {
        matches!(self, Type::Primitive(PrimitiveType::Null))
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_mixed(&self) -> bool {
        matches!(self, Type::Primitive(PrimitiveType::Mixed))
    }

    /// Check if this type mentions a generic parameter anywhere.
    #[must_use = "this is a pure check with no side effects"]
    pub fn has_generic_parameters(&self) -> bool {
        match self {
            Type::GenericParameter(_) => true,
            Type::Array(array) => {
                array.key.has_generic_parameters() || array.item.has_generic_parameters()
            }
            Type::Union(union) => union.members.iter().any(Type::has_generic_parameters),
            Type::Primitive(_) | Type::Class(_) | Type::Interface(_) => false,
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(kind: PrimitiveType) -> Self {
        Type::Primitive(kind)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Type::Primitive(kind) => write!(f, "{kind}"),
            Type::Array(array) => write!(f, "{array}"),
            Type::Class(object) | Type::Interface(object) => write!(f, "{}", object.name),
            Type::Union(union) => {
                for (idx, member) in union.members.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Type::GenericParameter(param) => write!(f, "{}", param.name),
        }
    }
}

impl Display for ArrayType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.key.is_mixed() {
            return write!(f, "array<{},{}>", self.key, self.item);
        }
        match self.item.as_ref() {
            item if item.is_mixed() => write!(f, "array"),
            Type::Union(_) => write!(f, "({})[]", self.item),
            item => write!(f, "{item}[]"),
        }
    }
}
