//! Docblock Parsing
//!
//! Extracts the parts of a `/** ... */` documentation comment that carry type
//! information:
//!
//! - the short description: text up to the first blank line or the first tag,
//!   with its lines joined by a single space
//! - `@param <type> $<name> [description]`
//! - `@return <type> [description]`
//! - `@var <type> [description]`
//!
//! Other tags are skipped. A tag's description continues on following lines
//! until the next tag. Type strings are kept verbatim; expanding relative names
//! is left to the type parser.

const PARAM_TAG: &str = "param";
const RETURN_TAG: &str = "return";
const VAR_TAG: &str = "var";
const VARIABLE_SIGIL: char = '$';
const DEFAULT_TYPE: &str = "mixed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    description: String,
    params: Vec<ParamTag>,
    return_tag: Option<TypedTag>,
    var_tag: Option<TypedTag>,
}

/// An `@param` tag. `name` carries no `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTag {
    pub name: String,
    pub raw_type: String,
    pub description: String,
}

/// A `@return` or `@var` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedTag {
    pub raw_type: String,
    pub description: String,
}

impl DocBlock {
    /// Parses a documentation comment. Never fails: unrecognized or incomplete
    /// tags are skipped.
    #[must_use]
    pub fn parse(comment: &str) -> Self {
        let body = comment.trim();
        let body = body.strip_prefix("/**").unwrap_or(body);
        let body = body.strip_suffix("*/").unwrap_or(body);

        let mut description: Vec<&str> = Vec::new();
        let mut in_description = true;
        let mut tags: Vec<String> = Vec::new();
        for line in body.lines().map(clean_line) {
            if line.starts_with('@') {
                in_description = false;
                tags.push(line.to_string());
            } else if let Some(tag) = tags.last_mut() {
                if !line.is_empty() {
                    tag.push(' ');
                    tag.push_str(line);
                }
            } else if in_description {
                if !line.is_empty() {
                    description.push(line);
                } else if !description.is_empty() {
                    in_description = false;
                }
            }
        }

        let mut block = DocBlock {
            description: description.join(" "),
            ..DocBlock::default()
        };
        for tag in &tags {
            block.apply(tag);
        }
        block
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn params(&self) -> &[ParamTag] {
        &self.params
    }

    /// Looks up the `@param` tag for `name`, given with or without `$`.
    #[must_use = "this is a pure lookup with no side effects"]
    pub fn param(&self, name: &str) -> Option<&ParamTag> {
        let name = name.strip_prefix(VARIABLE_SIGIL).unwrap_or(name);
        self.params.iter().find(|param| param.name == name)
    }

    #[must_use]
    pub fn return_tag(&self) -> Option<&TypedTag> {
        self.return_tag.as_ref()
    }

    #[must_use]
    pub fn var_tag(&self) -> Option<&TypedTag> {
        self.var_tag.as_ref()
    }

    fn apply(&mut self, tag: &str) {
        let (name, rest) = split_word(&tag[1..]);
        match name {
            PARAM_TAG => {
                let Some(param) = parse_param(rest) else {
                    tracing::trace!(tag, "skipping @param tag without a variable name");
                    return;
                };
                // A later tag for the same parameter replaces the earlier one.
                if let Some(existing) = self.params.iter_mut().find(|p| p.name == param.name) {
                    *existing = param;
                } else {
                    self.params.push(param);
                }
            }
            RETURN_TAG => {
                if self.return_tag.is_none() {
                    self.return_tag = parse_typed(rest);
                }
            }
            VAR_TAG => {
                if self.var_tag.is_none() {
                    self.var_tag = parse_typed(rest);
                }
            }
            _ => tracing::trace!(tag = name, "skipping docblock tag"),
        }
    }
}

fn clean_line(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix('*').unwrap_or(line).trim()
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}

/// Splits off a leading type string. Whitespace inside `<...>` or `(...)`
/// belongs to the type.
fn split_type(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    let mut depth = 0_usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                return (&text[..idx], text[idx..].trim_start());
            }
            _ => {}
        }
    }
    (text, "")
}

fn parse_param(text: &str) -> Option<ParamTag> {
    let (raw_type, rest) = if text.starts_with(VARIABLE_SIGIL) {
        (DEFAULT_TYPE, text)
    } else {
        split_type(text)
    };
    let (variable, description) = split_word(rest);
    let name = variable.strip_prefix(VARIABLE_SIGIL)?;
    if name.is_empty() {
        return None;
    }
    Some(ParamTag {
        name: name.to_string(),
        raw_type: raw_type.to_string(),
        description: description.to_string(),
    })
}

fn parse_typed(text: &str) -> Option<TypedTag> {
    let (raw_type, description) = split_type(text);
    if raw_type.is_empty() {
        return None;
    }
    Some(TypedTag {
        raw_type: raw_type.to_string(),
        description: description.to_string(),
    })
}
