//! Type String Parser
//!
//! Turns annotation text such as `Foo|Bar[]`, `array<string,int>` or
//! `(int|null)[]` into a [`Type`]. Rules are tried in order, first match wins:
//!
//! 1. split on `|` at bracket depth zero and unite the parts
//! 2. strip grouping parentheses: `(A|B)`
//! 3. primitive names and their aliases
//! 4. `T[]` suffix: array of `T` with `mixed` keys
//! 5. `array`, `array<V>` and `array<K,V>`
//! 6. anything else is an object-type name, resolved to a fully-qualified name
//!    and looked up in the [`SymbolOracle`](crate::SymbolOracle)

use crate::errors::TypeError;
use crate::primitive::PrimitiveType;
use crate::resolver::NameResolver;
use crate::type_system::TypeSystem;
use crate::types::{NAMESPACE_SEPARATOR, Type};

const ARRAY_KEYWORD: &str = "array";
const ARRAY_SUFFIX: &str = "[]";

/// Deepest nesting of arrays and groups an annotation may have.
pub(crate) const MAX_NESTING: usize = 64;

impl TypeSystem<'_> {
    /// Parses an annotation into a type.
    ///
    /// Absolute names start with `\`. Relative names are expanded by `resolver`;
    /// without a resolver they are taken as fully-qualified.
    ///
    /// # Errors
    ///
    /// - [`TypeError::Malformed`] if the text cannot be split or named correctly,
    ///   or nests arrays and groups deeper than 64 levels
    /// - [`TypeError::UnknownSymbol`] if a name is neither a class nor an interface
    /// - [`TypeError::Resolution`] if the resolver fails
    pub fn type_of(
        &self,
        text: &str,
        resolver: Option<&dyn NameResolver>,
    ) -> Result<Type, TypeError> {
        self.parse_union(text, resolver, 0)
    }

    fn parse_union(
        &self,
        text: &str,
        resolver: Option<&dyn NameResolver>,
        depth: usize,
    ) -> Result<Type, TypeError> {
        if depth > MAX_NESTING {
            return Err(TypeError::malformed(text, "type nesting too deep"));
        }
        let parts = split_top_level(text, '|')?;
        if let [single] = parts.as_slice() {
            return self.parse_single(single, resolver, depth);
        }
        let members = parts
            .iter()
            .map(|part| self.parse_single(part, resolver, depth))
            .collect::<Result<Vec<_>, _>>()?;
        self.union_of(members)
    }

    fn parse_single(
        &self,
        text: &str,
        resolver: Option<&dyn NameResolver>,
        depth: usize,
    ) -> Result<Type, TypeError> {
        if let Some(inner) = strip_group(text) {
            return self.parse_union(inner, resolver, depth + 1);
        }

        if let Some(kind) = PrimitiveType::parse(text) {
            return Ok(Type::Primitive(kind));
        }

        if let Some(prefix) = text.strip_suffix(ARRAY_SUFFIX) {
            if prefix.trim().is_empty() {
                return Err(TypeError::malformed(text, "array suffix without item type"));
            }
            let item = self.parse_union(prefix, resolver, depth + 1)?;
            return Ok(Type::array_of(item));
        }

        if text == ARRAY_KEYWORD {
            return Ok(Type::array_of(Type::mixed()));
        }

        if let Some(arguments) = text
            .strip_prefix(ARRAY_KEYWORD)
            .and_then(|rest| rest.strip_prefix('<'))
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return self.parse_array_arguments(text, arguments, resolver, depth + 1);
        }

        let full_name = self.full_name(text, resolver)?;
        let ty = self.object_type(&full_name)?;
        tracing::trace!(annotation = text, ty = %ty, "resolved object type");
        Ok(ty)
    }

    fn parse_array_arguments(
        &self,
        text: &str,
        arguments: &str,
        resolver: Option<&dyn NameResolver>,
        depth: usize,
    ) -> Result<Type, TypeError> {
        let arguments = split_top_level(arguments, ',')
            .map_err(|_| TypeError::malformed(text, "invalid array type arguments"))?;
        match arguments.as_slice() {
            [item] => Ok(Type::array_of(self.parse_union(item, resolver, depth)?)),
            [key, item] => Ok(Type::array(
                self.parse_union(key, resolver, depth)?,
                self.parse_union(item, resolver, depth)?,
            )),
            _ => Err(TypeError::malformed(
                text,
                "array takes one or two type arguments",
            )),
        }
    }

    /// Expands an object-type name as written in an annotation.
    fn full_name(&self, text: &str, resolver: Option<&dyn NameResolver>) -> Result<String, TypeError> {
        if let Some(absolute) = text.strip_prefix(NAMESPACE_SEPARATOR) {
            validate_name(text, absolute)?;
            return Ok(absolute.to_string());
        }
        validate_name(text, text)?;
        let Some(resolver) = resolver else {
            return Ok(text.to_string());
        };
        let resolved = resolver
            .resolve(text)
            .map_err(|source| TypeError::Resolution {
                name: text.to_string(),
                source,
            })?;
        tracing::debug!(short = text, resolved = %resolved, "expanded relative type name");
        Ok(resolved.trim_start_matches(NAMESPACE_SEPARATOR).to_string())
    }
}

/// Splits `text` on `separator` wherever no `<…>` or `(…)` is open.
///
/// Parts are trimmed. Empty parts and unbalanced brackets are malformed.
fn split_top_level(text: &str, separator: char) -> Result<Vec<&str>, TypeError> {
    let mut open: Vec<char> = Vec::new();
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        match ch {
            '<' | '(' => open.push(ch),
            '>' | ')' => {
                let expected = if ch == '>' { '<' } else { '(' };
                if open.pop() != Some(expected) {
                    return Err(TypeError::malformed(text, format!("unbalanced `{ch}`")));
                }
            }
            c if c == separator && open.is_empty() => {
                parts.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    if let Some(unclosed) = open.last() {
        return Err(TypeError::malformed(text, format!("unclosed `{unclosed}`")));
    }
    parts.push(&text[start..]);

    let parts: Vec<&str> = parts.into_iter().map(str::trim).collect();
    if parts.iter().any(|part| part.is_empty()) {
        let reason = if parts.len() == 1 {
            "empty type".to_string()
        } else {
            format!("empty part around `{separator}`")
        };
        return Err(TypeError::malformed(text, reason));
    }
    Ok(parts)
}

/// Returns the inner text if `text` is entirely wrapped in one pair of parentheses.
fn strip_group(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0_usize;
    for ch in inner.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

/// Checks that `name` is a `\`-separated sequence of identifiers.
fn validate_name(text: &str, name: &str) -> Result<(), TypeError> {
    let valid = !name.is_empty()
        && name.split(NAMESPACE_SEPARATOR).all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|first| first == '_' || first.is_alphabetic() || !first.is_ascii())
                && chars.all(|c| c == '_' || c.is_alphanumeric() || !c.is_ascii())
        });
    if valid {
        Ok(())
    } else {
        Err(TypeError::malformed(text, "invalid class or interface name"))
    }
}
