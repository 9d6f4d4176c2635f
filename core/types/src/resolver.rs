//! Collaborator Interfaces
//!
//! The type algebra knows nothing about source files or declarations. It asks two
//! narrow questions of its environment:
//!
//! - [`NameResolver`] expands a relative type name written in an annotation into a
//!   fully-qualified one.
//! - [`SymbolOracle`] reports which classes and interfaces exist and how they relate.
//!
//! Answers must be stable for the lifetime of the process.

/// Name of the method that makes instances of a class invocable.
pub const INVOCATION_METHOD: &str = "__invoke";

/// Resolves relative class or interface names to fully-qualified ones.
pub trait NameResolver {
    /// Resolves `short_name`, which never starts with a namespace separator.
    ///
    /// The returned name must not start with a namespace separator either.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver cannot determine the full name. The type
    /// system propagates it unchanged as the source of
    /// [`TypeError::Resolution`](crate::TypeError::Resolution).
    fn resolve(&self, short_name: &str) -> anyhow::Result<String>;
}

impl<F> NameResolver for F
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    fn resolve(&self, short_name: &str) -> anyhow::Result<String> {
        self(short_name)
    }
}

/// Read-only view of the classes and interfaces known to the host.
///
/// All names are fully-qualified and carry no leading namespace separator.
pub trait SymbolOracle {
    fn class_exists(&self, name: &str) -> bool;

    fn interface_exists(&self, name: &str) -> bool;

    /// True if `name` is a proper subtype of `of_name`: a subclass, a sub-interface
    /// or an implementor. Never true for `name == of_name`.
    fn is_subtype_of(&self, name: &str, of_name: &str) -> bool;

    /// True if the class `class_name` implements `interface_name`, directly or
    /// through a parent class or an extended interface.
    fn implements(&self, class_name: &str, interface_name: &str) -> bool;

    /// True if instances of the object type expose [`INVOCATION_METHOD`].
    fn has_invocation_method(&self, object_type_name: &str) -> bool;

    /// True if an instance whose runtime class is `class_name` is a member of the
    /// object type `type_name`.
    fn instance_of(&self, class_name: &str, type_name: &str) -> bool {
        class_name == type_name || self.is_subtype_of(class_name, type_name)
    }
}

impl<T: SymbolOracle + ?Sized> SymbolOracle for &T {
    fn class_exists(&self, name: &str) -> bool {
        (**self).class_exists(name)
    }

    fn interface_exists(&self, name: &str) -> bool {
        (**self).interface_exists(name)
    }

    fn is_subtype_of(&self, name: &str, of_name: &str) -> bool {
        (**self).is_subtype_of(name, of_name)
    }

    fn implements(&self, class_name: &str, interface_name: &str) -> bool {
        (**self).implements(class_name, interface_name)
    }

    fn has_invocation_method(&self, object_type_name: &str) -> bool {
        (**self).has_invocation_method(object_type_name)
    }

    fn instance_of(&self, class_name: &str, type_name: &str) -> bool {
        (**self).instance_of(class_name, type_name)
    }
}

/// An oracle that knows no symbols at all.
///
/// Useful for annotations made only of primitives and arrays.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSymbols;

impl SymbolOracle for NoSymbols {
    fn class_exists(&self, _name: &str) -> bool {
        false
    }

    fn interface_exists(&self, _name: &str) -> bool {
        false
    }

    fn is_subtype_of(&self, _name: &str, _of_name: &str) -> bool {
        false
    }

    fn implements(&self, _class_name: &str, _interface_name: &str) -> bool {
        false
    }

    fn has_invocation_method(&self, _object_type_name: &str) -> bool {
        false
    }
}
