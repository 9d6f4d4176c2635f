//! Assignability and Equality
//!
//! `is_assignable_from(target, candidate)` answers whether a value typed
//! `candidate` may be used where `target` is expected:
//!
//! - **Primitive**: same kind; `mixed` accepts everything; `object` accepts
//!   classes, interfaces and unions made only of those; `callable` accepts object
//!   types with an invocation method.
//! - **Array**: only arrays whose key and item types are each *equal* to the
//!   target's. Arrays are invariant.
//! - **Class**: the same class or a subclass.
//! - **Interface**: the same interface, a sub-interface, or an implementing class.
//! - **Union**: every member of the candidate (a non-union candidate counts as a
//!   single member) must be accepted by at least one member of the target.
//! - **Generic parameter**: nothing.
//!
//! Equality is mutual assignability and must coincide with name equality. A
//! divergence means the algebra itself is broken, so it panics.

use crate::primitive::PrimitiveType;
use crate::type_system::{CLOSURE_CLASS, TypeSystem};
use crate::types::{ArrayType, ObjectType, Type, UnionType};
use crate::value::Value;

impl TypeSystem<'_> {
    #[must_use = "this is a pure check with no side effects"]
    pub fn is_assignable_from(&self, target: &Type, candidate: &Type) -> bool {
        match target {
            Type::Primitive(kind) => self.primitive_accepts(*kind, candidate),
            Type::Array(array) => self.array_accepts(array, candidate),
            Type::Class(class) => match candidate {
                Type::Class(other) => {
                    other.name() == class.name()
                        || self.oracle().is_subtype_of(other.name(), class.name())
                }
                _ => false,
            },
            Type::Interface(interface) => match candidate {
                Type::Interface(other) => {
                    other.name() == interface.name()
                        || self.oracle().is_subtype_of(other.name(), interface.name())
                }
                Type::Class(class) => self.oracle().implements(class.name(), interface.name()),
                _ => false,
            },
            Type::Union(union) => match candidate {
                Type::Union(other) => other
                    .members()
                    .iter()
                    .all(|member| self.union_accepts(union, member)),
                _ => self.union_accepts(union, candidate),
            },
            Type::GenericParameter(_) => false,
        }
    }

    /// Checks whether `a` and `b` denote the same type.
    ///
    /// # Panics
    ///
    /// Panics if mutual assignability disagrees with name equality for types
    /// without generic parameters. That can only happen through a bug in the
    /// algebra or an oracle reporting cyclic inheritance.
    #[must_use = "this is a pure check with no side effects"]
    pub fn equals(&self, a: &Type, b: &Type) -> bool {
        let equal = self.is_assignable_from(a, b) && self.is_assignable_from(b, a);
        if a.has_generic_parameters() || b.has_generic_parameters() {
            return equal;
        }
        let same_name = a.name() == b.name();
        assert!(
            equal == same_name,
            "type algebra invariant violated: `{a}` and `{b}` are {} but their names {}",
            if equal { "mutually assignable" } else { "not mutually assignable" },
            if same_name { "match" } else { "differ" },
        );
        equal
    }

    /// Checks whether a runtime value is a member of `target`.
    #[must_use = "this is a pure check with no side effects"]
    pub fn is_assignable_from_value(&self, target: &Type, value: &Value) -> bool {
        match target {
            Type::Primitive(kind) => self.primitive_accepts_value(*kind, value),
            Type::Array(array) => match value {
                Value::Array(entries) => entries.iter().all(|(key, item)| {
                    self.is_assignable_from_value(array.item_type(), item)
                        && self.is_assignable_from_value(array.key_type(), &Value::from(key.clone()))
                }),
                _ => false,
            },
            Type::Class(object) | Type::Interface(object) => self.object_accepts_value(object, value),
            Type::Union(union) => union
                .members()
                .iter()
                .any(|member| self.is_assignable_from_value(member, value)),
            Type::GenericParameter(_) => false,
        }
    }

    fn primitive_accepts(&self, kind: PrimitiveType, candidate: &Type) -> bool {
        if candidate.as_primitive() == Some(kind) {
            return true;
        }
        match kind {
            PrimitiveType::Mixed => true,
            PrimitiveType::Object => match candidate {
                Type::Class(_) | Type::Interface(_) => true,
                Type::Union(union) => union.members().iter().all(Type::is_object_type),
                _ => false,
            },
            PrimitiveType::Callable => candidate
                .object_name()
                .is_some_and(|name| self.oracle().has_invocation_method(name)),
            PrimitiveType::Integer
            | PrimitiveType::Float
            | PrimitiveType::String
            | PrimitiveType::Boolean
            | PrimitiveType::Resource
            | PrimitiveType::Null => false,
        }
    }

    fn array_accepts(&self, array: &ArrayType, candidate: &Type) -> bool {
        let Type::Array(other) = candidate else {
            return false;
        };
        self.equals(array.item_type(), other.item_type())
            && self.equals(array.key_type(), other.key_type())
    }

    fn union_accepts(&self, union: &UnionType, candidate: &Type) -> bool {
        union
            .members()
            .iter()
            .any(|member| self.is_assignable_from(member, candidate))
    }

    fn primitive_accepts_value(&self, kind: PrimitiveType, value: &Value) -> bool {
        match kind {
            PrimitiveType::Integer => matches!(value, Value::Int(_)),
            PrimitiveType::Float => matches!(value, Value::Float(_)),
            PrimitiveType::String => matches!(value, Value::String(_)),
            PrimitiveType::Boolean => matches!(value, Value::Bool(_)),
            PrimitiveType::Mixed => true,
            PrimitiveType::Resource => matches!(value, Value::Resource(_)),
            PrimitiveType::Object => matches!(value, Value::Object { .. } | Value::Closure),
            PrimitiveType::Null => matches!(value, Value::Null),
            PrimitiveType::Callable => match value {
                Value::Closure => true,
                Value::Object { class } => self.oracle().has_invocation_method(class),
                _ => false,
            },
        }
    }

    fn object_accepts_value(&self, object: &ObjectType, value: &Value) -> bool {
        match value {
            Value::Object { class } => self.oracle().instance_of(class, object.name()),
            Value::Closure => self.oracle().instance_of(CLOSURE_CLASS, object.name()),
            _ => false,
        }
    }
}
