//! Type System Entry Points
//!
//! [`TypeSystem`] binds the pure type algebra to a [`SymbolOracle`]. Every
//! operation that needs to know whether a symbol exists, or how two symbols
//! relate, goes through it:
//!
//! - construction: [`type_of`](TypeSystem::type_of), [`union_of`](TypeSystem::union_of),
//!   [`nullable_of`](TypeSystem::nullable_of), [`type_of_value`](TypeSystem::type_of_value)
//! - relations: [`is_assignable_from`](TypeSystem::is_assignable_from),
//!   [`is_assignable_from_value`](TypeSystem::is_assignable_from_value),
//!   [`equals`](TypeSystem::equals)
//!
//! The parser lives in `parser.rs`, union canonicalization in `union.rs` and the
//! relations in `assignability.rs`; each extends this type with its own `impl`.

use core::fmt;

use crate::errors::TypeError;
use crate::resolver::SymbolOracle;
use crate::types::{ObjectType, Type};
use crate::value::Value;

/// Name of the class every anonymous function is an instance of.
pub const CLOSURE_CLASS: &str = "Closure";

#[derive(Clone, Copy)]
pub struct TypeSystem<'a> {
    oracle: &'a dyn SymbolOracle,
}

impl fmt::Debug for TypeSystem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSystem").finish_non_exhaustive()
    }
}

impl<'a> TypeSystem<'a> {
    #[must_use]
    pub fn new(oracle: &'a dyn SymbolOracle) -> Self {
        Self { oracle }
    }

    #[must_use]
    pub fn oracle(&self) -> &'a dyn SymbolOracle {
        self.oracle
    }

    /// Gets a class or interface type by its fully-qualified name.
    ///
    /// # Errors
    ///
    /// Fails if `name` is malformed, unknown, or denotes a non-object type.
    pub fn object_type_of(&self, name: &str) -> Result<Type, TypeError> {
        let ty = self.type_of(name, None)?;
        if ty.is_object_type() {
            Ok(ty)
        } else {
            Err(TypeError::NotAnObjectType {
                name: name.to_string(),
            })
        }
    }

    /// Gets a class type by its fully-qualified name.
    ///
    /// # Errors
    ///
    /// Fails if `name` does not describe an existing class.
    pub fn class_of(&self, name: &str) -> Result<Type, TypeError> {
        match self.type_of(name, None)? {
            ty @ Type::Class(_) => Ok(ty),
            _ => Err(TypeError::NotAClass {
                name: name.to_string(),
            }),
        }
    }

    /// Gets an interface type by its fully-qualified name.
    ///
    /// # Errors
    ///
    /// Fails if `name` does not describe an existing interface.
    pub fn interface_of(&self, name: &str) -> Result<Type, TypeError> {
        match self.type_of(name, None)? {
            ty @ Type::Interface(_) => Ok(ty),
            _ => Err(TypeError::NotAnInterface {
                name: name.to_string(),
            }),
        }
    }

    /// An array with `mixed` keys whose items are of type `item`.
    #[must_use]
    pub fn array_of(&self, item: Type) -> Type {
        Type::array_of(item)
    }

    /// Allows `ty` to be null. Equivalent to `union_of([ty, null])`.
    #[must_use]
    pub fn nullable_of(&self, ty: Type) -> Type {
        self.canonicalize(ty, [Type::null()])
    }

    /// Classifies a runtime value.
    ///
    /// Arrays are typed as plain `array`; item types are not inferred.
    ///
    /// # Errors
    ///
    /// Fails if an object value names a class the oracle does not know.
    pub fn type_of_value(&self, value: &Value) -> Result<Type, TypeError> {
        let ty = match value {
            Value::Null => Type::null(),
            Value::Bool(_) => Type::boolean(),
            Value::Int(_) => Type::integer(),
            Value::Float(_) => Type::float(),
            Value::String(_) => Type::string(),
            Value::Resource(_) => Type::resource(),
            Value::Array(_) => Type::array_of(Type::mixed()),
            Value::Object { class } => self.object_type(class)?,
            Value::Closure => {
                if self.oracle.class_exists(CLOSURE_CLASS) {
                    Type::Class(ObjectType::new(CLOSURE_CLASS))
                } else {
                    Type::callable()
                }
            }
        };
        Ok(ty)
    }

    /// Builds the object type for a fully-qualified name, asking the oracle
    /// whether it is an interface or a class.
    pub(crate) fn object_type(&self, full_name: &str) -> Result<Type, TypeError> {
        if self.oracle.interface_exists(full_name) {
            Ok(Type::Interface(ObjectType::new(full_name)))
        } else if self.oracle.class_exists(full_name) {
            Ok(Type::Class(ObjectType::new(full_name)))
        } else {
            Err(TypeError::UnknownSymbol {
                name: full_name.to_string(),
            })
        }
    }
}
