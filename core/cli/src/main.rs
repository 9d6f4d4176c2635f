#![warn(clippy::pedantic)]

//! # Docblock Type CLI
//!
//! Command line interface for the docblock type algebra.
//!
//! 1. Name     (`name`)     – print the canonical name of an annotation.
//! 2. Check    (`check`)    – print whether one type is assignable from another.
//! 3. Accepts  (`accepts`)  – print whether a JSON value is a member of a type.
//! 4. Describe (`describe`) – print the documentation of a method or property.
//!
//! Classes and interfaces come from a JSON symbol manifest given with `--symbols`
//! or `DOCTY_SYMBOLS`.
//!
//! ## Exit codes
//! * 0 – success, including a `false` answer.
//! * 1 – usage / IO / manifest / parse failure.
//!
//! ## Example
//! ```bash
//! docty --symbols symbols.json name 'Type|MyClass' --context 'App\MyClass'
//! ```

mod json_value;
mod logging;
mod parser;

use std::fmt::Write;
use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;
use doctype_metadata::{MethodInfo, PropertyInfo, SymbolTable};
use doctype_types::{NameResolver, Type, TypeSystem};
use parser::{Cli, Command};

/// Entry point for the CLI executable.
///
/// Results go to stdout. On any failure the error chain is printed to stderr
/// and the process exits with code `1`.
fn main() {
    logging::init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let table = load_table(cli.symbols.as_deref())?;
    let types = TypeSystem::new(&table);
    match &cli.command {
        Command::Name {
            annotation,
            context,
        } => {
            let resolver = context_resolver(&table, context.as_deref())?;
            Ok(parse_type(&types, annotation, resolver)?.name())
        }
        Command::Check {
            target,
            candidate,
            context,
        } => {
            let resolver = context_resolver(&table, context.as_deref())?;
            let target = parse_type(&types, target, resolver)?;
            let candidate = parse_type(&types, candidate, resolver)?;
            Ok(types.is_assignable_from(&target, &candidate).to_string())
        }
        Command::Accepts {
            annotation,
            json,
            context,
        } => {
            let resolver = context_resolver(&table, context.as_deref())?;
            let ty = parse_type(&types, annotation, resolver)?;
            let value = json_value::parse(json)?;
            Ok(types.is_assignable_from_value(&ty, &value).to_string())
        }
        Command::Describe { ty, member } => {
            let ty = ty.trim_start_matches('\\');
            if let Some(property) = member.strip_prefix('$') {
                describe_property(&types, table.property(ty, property)?)
            } else {
                describe_method(&types, table.method(ty, member)?)
            }
        }
    }
}

fn load_table(path: Option<&Path>) -> anyhow::Result<SymbolTable> {
    let Some(path) = path else {
        return Ok(SymbolTable::new());
    };
    SymbolTable::load(path)
        .with_context(|| format!("failed to load symbols from `{}`", path.display()))
}

fn context_resolver<'a>(
    table: &'a SymbolTable,
    context: Option<&str>,
) -> anyhow::Result<Option<&'a dyn NameResolver>> {
    let Some(context) = context else {
        return Ok(None);
    };
    let resolver: &dyn NameResolver = table
        .resolver(context)
        .with_context(|| format!("invalid context `{context}`"))?;
    Ok(Some(resolver))
}

fn parse_type(
    types: &TypeSystem<'_>,
    text: &str,
    resolver: Option<&dyn NameResolver>,
) -> anyhow::Result<Type> {
    types
        .type_of(text, resolver)
        .with_context(|| format!("cannot parse type `{text}`"))
}

fn describe_method(types: &TypeSystem<'_>, method: &MethodInfo) -> anyhow::Result<String> {
    let mut out = format!("{}::{}()", method.declaring_type(), method.name());
    if !method.description().is_empty() {
        write!(out, "\n{}", method.description())?;
    }
    for param in method.parameters() {
        let ty = param.ty(types)?;
        write!(out, "\n@param {ty} ${}", param.name())?;
        if !param.description().is_empty() {
            write!(out, " {}", param.description())?;
        }
    }
    if let Some(result) = method.result() {
        let ty = result.ty(types)?;
        write!(out, "\n@return {ty}")?;
        if !result.description().is_empty() {
            write!(out, " {}", result.description())?;
        }
    }
    Ok(out)
}

fn describe_property(types: &TypeSystem<'_>, property: &PropertyInfo) -> anyhow::Result<String> {
    let mut out = format!("{}::${}", property.declaring_type(), property.name());
    if !property.description().is_empty() {
        write!(out, "\n{}", property.description())?;
    }
    write!(out, "\n@var {}", property.ty(types)?)?;
    Ok(out)
}
