//! Symbol Table
//!
//! A static registry of classes and interfaces that backs the
//! [`SymbolOracle`] queries of the type system. It supports:
//!
//! - Class and interface registration, rejecting duplicates
//! - Loading whole declaration sets from a JSON manifest
//! - Transitive subtype queries over parents, implemented and extended interfaces
//! - Method and property lookup, including members inherited from supertypes
//!
//! Names are stored fully-qualified without a leading separator. Registration
//! does not require supertypes to exist yet; [`SymbolTable::validate`] checks
//! references and rejects inheritance cycles once everything is registered.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

use doctype_types::{INVOCATION_METHOD, NAMESPACE_SEPARATOR, SymbolOracle};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{MetadataError, SymbolKind};
use crate::import_resolver::ImportResolver;
use crate::manifest::{ClassDecl, InterfaceDecl, SymbolManifest};
use crate::member_info::{MethodInfo, PropertyInfo};

#[derive(Debug)]
struct ClassSymbol {
    parent: Option<String>,
    interfaces: Vec<String>,
    is_abstract: bool,
    resolver: Arc<ImportResolver>,
    methods: Vec<MethodInfo>,
    properties: Vec<PropertyInfo>,
}

#[derive(Debug)]
struct InterfaceSymbol {
    extends: Vec<String>,
    resolver: Arc<ImportResolver>,
    methods: Vec<MethodInfo>,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    classes: FxHashMap<String, ClassSymbol>,
    interfaces: FxHashMap<String, InterfaceSymbol>,
}

fn normalize(name: &str) -> String {
    name.trim_start_matches(NAMESPACE_SEPARATOR).to_string()
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and validates a table from a manifest.
    ///
    /// # Errors
    ///
    /// Fails on duplicate names, unknown supertypes or cyclic inheritance.
    pub fn from_manifest(manifest: SymbolManifest) -> Result<Self, MetadataError> {
        let mut table = Self::new();
        for interface in manifest.interfaces {
            table.register_interface(interface)?;
        }
        for class in manifest.classes {
            table.register_class(class)?;
        }
        table.validate()?;
        tracing::debug!(
            classes = table.classes.len(),
            interfaces = table.interfaces.len(),
            "symbol table loaded"
        );
        Ok(table)
    }

    /// # Errors
    ///
    /// Fails if `json` is not a valid manifest or describes an invalid table.
    pub fn from_json_str(json: &str) -> Result<Self, MetadataError> {
        let manifest: SymbolManifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    /// Reads a manifest file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, or for the reasons of [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let json = std::fs::read_to_string(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::DuplicateSymbol`] if a class or interface with the
    /// same name is already registered.
    pub fn register_class(&mut self, decl: ClassDecl) -> Result<(), MetadataError> {
        let name = normalize(&decl.name);
        self.check_unused(&name, SymbolKind::Class)?;
        let resolver = Arc::new(ImportResolver::new(&name, decl.imports));
        let symbol = ClassSymbol {
            parent: decl.extends.as_deref().map(normalize),
            interfaces: decl.implements.iter().map(|i| normalize(i)).collect(),
            is_abstract: decl.is_abstract,
            resolver: Arc::clone(&resolver),
            methods: decl
                .methods
                .into_iter()
                .map(|method| MethodInfo::new(method, Arc::clone(&resolver)))
                .collect(),
            properties: decl
                .properties
                .into_iter()
                .map(|property| PropertyInfo::new(property, Arc::clone(&resolver)))
                .collect(),
        };
        tracing::trace!(class = %name, "registered class");
        self.classes.insert(name, symbol);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::DuplicateSymbol`] if a class or interface with the
    /// same name is already registered.
    pub fn register_interface(&mut self, decl: InterfaceDecl) -> Result<(), MetadataError> {
        let name = normalize(&decl.name);
        self.check_unused(&name, SymbolKind::Interface)?;
        let resolver = Arc::new(ImportResolver::new(&name, decl.imports));
        let symbol = InterfaceSymbol {
            extends: decl.extends.iter().map(|i| normalize(i)).collect(),
            resolver: Arc::clone(&resolver),
            methods: decl
                .methods
                .into_iter()
                .map(|method| MethodInfo::new(method, Arc::clone(&resolver)))
                .collect(),
        };
        tracing::trace!(interface = %name, "registered interface");
        self.interfaces.insert(name, symbol);
        Ok(())
    }

    fn check_unused(&self, name: &str, kind: SymbolKind) -> Result<(), MetadataError> {
        if self.classes.contains_key(name) || self.interfaces.contains_key(name) {
            return Err(MetadataError::DuplicateSymbol {
                kind,
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Checks that every supertype is registered with the right kind and that no
    /// type inherits from itself.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSupertype`] or
    /// [`MetadataError::InheritanceCycle`] for the first offending type, in name
    /// order.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let mut classes: Vec<(&String, &ClassSymbol)> = self.classes.iter().collect();
        classes.sort_by(|a, b| a.0.cmp(b.0));
        for (name, class) in classes {
            if let Some(parent) = &class.parent {
                self.expect_registered(name, parent, SymbolKind::Class)?;
            }
            for interface in &class.interfaces {
                self.expect_registered(name, interface, SymbolKind::Interface)?;
            }
        }

        let mut interfaces: Vec<(&String, &InterfaceSymbol)> = self.interfaces.iter().collect();
        interfaces.sort_by(|a, b| a.0.cmp(b.0));
        for (name, interface) in interfaces {
            for extended in &interface.extends {
                self.expect_registered(name, extended, SymbolKind::Interface)?;
            }
        }

        let mut names: Vec<&String> = self.classes.keys().chain(self.interfaces.keys()).collect();
        names.sort();
        if let Some(name) = names.into_iter().find(|name| self.reaches(name, name)) {
            return Err(MetadataError::InheritanceCycle { name: name.clone() });
        }
        Ok(())
    }

    fn expect_registered(
        &self,
        name: &str,
        supertype: &str,
        expected: SymbolKind,
    ) -> Result<(), MetadataError> {
        let registered = match expected {
            SymbolKind::Class => self.classes.contains_key(supertype),
            SymbolKind::Interface => self.interfaces.contains_key(supertype),
        };
        if registered {
            Ok(())
        } else {
            Err(MetadataError::UnknownSupertype {
                name: name.to_string(),
                supertype: supertype.to_string(),
                expected,
            })
        }
    }

    /// The resolver for relative names written inside `ty`'s declaration.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSymbol`] if `ty` is not registered.
    pub fn resolver(&self, ty: &str) -> Result<&ImportResolver, MetadataError> {
        let ty = ty.trim_start_matches(NAMESPACE_SEPARATOR);
        let resolver = if let Some(class) = self.classes.get(ty) {
            &class.resolver
        } else if let Some(interface) = self.interfaces.get(ty) {
            &interface.resolver
        } else {
            return Err(MetadataError::UnknownSymbol {
                name: ty.to_string(),
            });
        };
        Ok(resolver)
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_abstract(&self, class: &str) -> bool {
        self.classes
            .get(class)
            .is_some_and(|symbol| symbol.is_abstract)
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSymbol`] if `class` is not a registered class.
    pub fn parent_of(&self, class: &str) -> Result<Option<&str>, MetadataError> {
        Ok(self.class(class)?.parent.as_deref())
    }

    /// All interfaces `class` implements, directly or through parents and
    /// extended interfaces, nearest first.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSymbol`] if `class` is not a registered class.
    pub fn implemented_interfaces(&self, class: &str) -> Result<Vec<&str>, MetadataError> {
        self.class(class)?;
        Ok(self
            .supertypes(class)
            .into_iter()
            .filter(|name| self.interfaces.contains_key(*name))
            .collect())
    }

    /// Methods of a class or interface, including inherited ones. A method
    /// declared on a subtype hides methods of the same name further up.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSymbol`] if `ty` is not registered.
    pub fn methods(&self, ty: &str) -> Result<Vec<&MethodInfo>, MetadataError> {
        let mut seen = FxHashSet::default();
        let mut methods = Vec::new();
        for owner in self.lineage(ty)? {
            for method in self.declared_methods(owner) {
                if seen.insert(method.name().to_ascii_lowercase()) {
                    methods.push(method);
                }
            }
        }
        Ok(methods)
    }

    /// Finds a method by name, ignoring ASCII case, on `ty` or its supertypes.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSymbol`] for an unknown type and
    /// [`MetadataError::UnknownMember`] if no such method exists.
    pub fn method(&self, ty: &str, name: &str) -> Result<&MethodInfo, MetadataError> {
        self.lineage(ty)?
            .into_iter()
            .flat_map(move |owner| self.declared_methods(owner))
            .find(|method| method.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MetadataError::UnknownMember {
                owner: ty.to_string(),
                member: name.to_string(),
            })
    }

    /// Properties of a class, including those declared on parent classes.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSymbol`] if `class` is not a registered class.
    pub fn properties(&self, class: &str) -> Result<Vec<&PropertyInfo>, MetadataError> {
        self.class(class)?;
        let mut seen = FxHashSet::default();
        let mut properties = Vec::new();
        for owner in self.lineage(class)? {
            let Some(symbol) = self.classes.get(owner) else {
                continue;
            };
            for property in &symbol.properties {
                if seen.insert(property.name()) {
                    properties.push(property);
                }
            }
        }
        Ok(properties)
    }

    /// Finds a property by name, with or without `$`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownSymbol`] for an unknown class and
    /// [`MetadataError::UnknownMember`] if no such property exists.
    pub fn property(&self, class: &str, name: &str) -> Result<&PropertyInfo, MetadataError> {
        let bare = name.trim_start_matches('$');
        self.properties(class)?
            .into_iter()
            .find(|property| property.name() == bare)
            .ok_or_else(|| MetadataError::UnknownMember {
                owner: class.to_string(),
                member: format!("${bare}"),
            })
    }

    fn class(&self, name: &str) -> Result<&ClassSymbol, MetadataError> {
        self.classes
            .get(name)
            .ok_or_else(|| MetadataError::UnknownSymbol {
                name: name.to_string(),
            })
    }

    fn declared_methods(&self, name: &str) -> &[MethodInfo] {
        if let Some(class) = self.classes.get(name) {
            &class.methods
        } else if let Some(interface) = self.interfaces.get(name) {
            &interface.methods
        } else {
            &[]
        }
    }

    /// `ty` followed by all its supertypes.
    fn lineage<'a>(&'a self, ty: &'a str) -> Result<Vec<&'a str>, MetadataError> {
        if !self.class_exists(ty) && !self.interface_exists(ty) {
            return Err(MetadataError::UnknownSymbol {
                name: ty.to_string(),
            });
        }
        let mut lineage = vec![ty];
        lineage.extend(self.supertypes(ty));
        Ok(lineage)
    }

    fn direct_supertypes(&self, name: &str) -> Vec<&str> {
        if let Some(class) = self.classes.get(name) {
            class
                .parent
                .iter()
                .chain(&class.interfaces)
                .map(String::as_str)
                .collect()
        } else if let Some(interface) = self.interfaces.get(name) {
            interface.extends.iter().map(String::as_str).collect()
        } else {
            Vec::new()
        }
    }

    /// Proper supertypes of `name` in breadth-first order, each listed once.
    fn supertypes(&self, name: &str) -> Vec<&str> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut queue: VecDeque<&str> = self.direct_supertypes(name).into();
        let mut supertypes = Vec::new();
        while let Some(next) = queue.pop_front() {
            if next == name || !seen.insert(next) {
                continue;
            }
            supertypes.push(next);
            queue.extend(self.direct_supertypes(next));
        }
        supertypes
    }

    /// True if `target` is reachable from `from` by following supertype edges
    /// at least once.
    fn reaches(&self, from: &str, target: &str) -> bool {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut queue: VecDeque<&str> = self.direct_supertypes(from).into();
        while let Some(next) = queue.pop_front() {
            if next == target {
                return true;
            }
            if seen.insert(next) {
                queue.extend(self.direct_supertypes(next));
            }
        }
        false
    }
}

impl SymbolOracle for SymbolTable {
    fn class_exists(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    fn interface_exists(&self, name: &str) -> bool {
        self.interfaces.contains_key(name)
    }

    fn is_subtype_of(&self, name: &str, of_name: &str) -> bool {
        name != of_name && self.reaches(name, of_name)
    }

    fn implements(&self, class_name: &str, interface_name: &str) -> bool {
        self.class_exists(class_name)
            && self.interface_exists(interface_name)
            && self.is_subtype_of(class_name, interface_name)
    }

    fn has_invocation_method(&self, object_type_name: &str) -> bool {
        self.method(object_type_name, INVOCATION_METHOD).is_ok()
    }
}
