//! Member Metadata
//!
//! Methods, parameters, results and properties of registered types. Docblocks are
//! parsed on first access and each annotated type is parsed at most once, with
//! the import resolver of the type that declares the member.
//!
//! A type is computed with the first [`TypeSystem`] it is requested for and
//! cached from then on.

use std::sync::Arc;

use doctype_types::{Type, TypeError, TypeSystem};
use once_cell::sync::OnceCell;

use crate::docblock::DocBlock;
use crate::errors::MetadataError;
use crate::import_resolver::ImportResolver;
use crate::manifest::{MethodDecl, PropertyDecl};

/// Annotation assumed for members without a type tag.
const UNTYPED: &str = "mixed";

#[derive(Debug)]
struct LazyDoc {
    owner: String,
    text: Option<String>,
    parsed: OnceCell<DocBlock>,
}

impl LazyDoc {
    fn new(owner: String, text: Option<String>) -> Self {
        Self {
            owner,
            text,
            parsed: OnceCell::new(),
        }
    }

    fn get(&self) -> &DocBlock {
        self.parsed.get_or_init(|| {
            tracing::debug!(owner = %self.owner, "parsing docblock");
            self.text.as_deref().map(DocBlock::parse).unwrap_or_default()
        })
    }
}

fn cached_type(
    cache: &OnceCell<Type>,
    raw_type: &str,
    resolver: &ImportResolver,
    types: &TypeSystem<'_>,
) -> Result<Type, MetadataError> {
    let ty = cache.get_or_try_init(|| {
        let ty = types.type_of(raw_type, Some(resolver))?;
        tracing::debug!(
            declaring_type = resolver.declaring_type(),
            annotation = raw_type,
            ty = %ty,
            "parsed member type"
        );
        Ok::<_, TypeError>(ty)
    })?;
    Ok(ty.clone())
}

#[derive(Debug)]
pub struct MethodInfo {
    name: String,
    doc: Arc<LazyDoc>,
    resolver: Arc<ImportResolver>,
    parameters: Vec<ParameterInfo>,
    result: OnceCell<Option<ResultInfo>>,
}

impl MethodInfo {
    pub(crate) fn new(decl: MethodDecl, resolver: Arc<ImportResolver>) -> Self {
        let owner = format!("{}::{}", resolver.declaring_type(), decl.name);
        let doc = Arc::new(LazyDoc::new(owner, decl.doc));
        let parameters = decl
            .parameters
            .iter()
            .map(|name| ParameterInfo {
                name: name.trim_start_matches('$').to_string(),
                doc: Arc::clone(&doc),
                resolver: Arc::clone(&resolver),
                ty: OnceCell::new(),
            })
            .collect();
        Self {
            name: decl.name,
            doc,
            resolver,
            parameters,
            result: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully-qualified name of the class or interface declaring this method.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        self.resolver.declaring_type()
    }

    #[must_use]
    pub fn docblock(&self) -> &DocBlock {
        self.doc.get()
    }

    /// The short description from the docblock, empty if there is none.
    #[must_use]
    pub fn description(&self) -> &str {
        self.doc.get().description()
    }

    #[must_use]
    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    /// Looks up a parameter by name, given with or without `$`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownMember`] if the method has no such parameter.
    pub fn parameter(&self, name: &str) -> Result<&ParameterInfo, MetadataError> {
        let bare = name.trim_start_matches('$');
        self.parameters
            .iter()
            .find(|param| param.name == bare)
            .ok_or_else(|| MetadataError::UnknownMember {
                owner: format!("{}::{}", self.declaring_type(), self.name),
                member: format!("${bare}"),
            })
    }

    /// The documented result, or `None` without a `@return` tag.
    #[must_use]
    pub fn result(&self) -> Option<&ResultInfo> {
        self.result
            .get_or_init(|| {
                self.doc.get().return_tag().map(|tag| ResultInfo {
                    description: tag.description.clone(),
                    raw_type: tag.raw_type.clone(),
                    resolver: Arc::clone(&self.resolver),
                    ty: OnceCell::new(),
                })
            })
            .as_ref()
    }
}

/// A method parameter. Without an `@param` tag it has an empty description and
/// type `mixed`.
#[derive(Debug)]
pub struct ParameterInfo {
    name: String,
    doc: Arc<LazyDoc>,
    resolver: Arc<ImportResolver>,
    ty: OnceCell<Type>,
}

impl ParameterInfo {
    /// The parameter name, without `$`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.doc
            .get()
            .param(&self.name)
            .map_or("", |tag| tag.description.as_str())
    }

    /// The annotation as written in the `@param` tag.
    #[must_use]
    pub fn raw_type(&self) -> &str {
        self.doc
            .get()
            .param(&self.name)
            .map_or(UNTYPED, |tag| tag.raw_type.as_str())
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::Type`] if the annotation does not parse.
    pub fn ty(&self, types: &TypeSystem<'_>) -> Result<Type, MetadataError> {
        cached_type(&self.ty, self.raw_type(), &self.resolver, types)
    }
}

#[derive(Debug)]
pub struct ResultInfo {
    description: String,
    raw_type: String,
    resolver: Arc<ImportResolver>,
    ty: OnceCell<Type>,
}

impl ResultInfo {
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::Type`] if the annotation does not parse.
    pub fn ty(&self, types: &TypeSystem<'_>) -> Result<Type, MetadataError> {
        cached_type(&self.ty, &self.raw_type, &self.resolver, types)
    }
}

/// A class property, typed by the `@var` tag of its docblock.
#[derive(Debug)]
pub struct PropertyInfo {
    name: String,
    doc: LazyDoc,
    resolver: Arc<ImportResolver>,
    ty: OnceCell<Type>,
}

impl PropertyInfo {
    pub(crate) fn new(decl: PropertyDecl, resolver: Arc<ImportResolver>) -> Self {
        let owner = format!("{}::${}", resolver.declaring_type(), decl.name);
        Self {
            name: decl.name.trim_start_matches('$').to_string(),
            doc: LazyDoc::new(owner, decl.doc),
            resolver,
            ty: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn declaring_type(&self) -> &str {
        self.resolver.declaring_type()
    }

    #[must_use]
    pub fn docblock(&self) -> &DocBlock {
        self.doc.get()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.doc.get().description()
    }

    #[must_use]
    pub fn raw_type(&self) -> &str {
        self.doc
            .get()
            .var_tag()
            .map_or(UNTYPED, |tag| tag.raw_type.as_str())
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::Type`] if the annotation does not parse.
    pub fn ty(&self, types: &TypeSystem<'_>) -> Result<Type, MetadataError> {
        cached_type(&self.ty, self.raw_type(), &self.resolver, types)
    }
}
