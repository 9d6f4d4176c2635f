//! Command line argument parsing for `docty`.
//!
//! This module defines the CLI interface using `clap`. The `Cli` struct captures
//! the global options and the subcommand passed to the binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface definition for the docblock type tool.
///
/// Every subcommand works against a symbol table loaded from a JSON manifest
/// (`--symbols` or `DOCTY_SYMBOLS`). Without a manifest only primitives and
/// arrays can be named.
///
/// ## Relative Names
///
/// `--context <TYPE>` names the class or interface an annotation is written in.
/// Relative names are then resolved through that type's `use` aliases and
/// namespace, exactly as its own docblocks would be.
///
/// ## Examples
///
/// Canonical name of an annotation:
/// ```bash
/// docty name 'int|null|string'
/// ```
///
/// Assignability between two annotations:
/// ```bash
/// docty --symbols symbols.json check 'App\Shape' 'App\Square'
/// ```
///
/// Whether a JSON value is a member of a type:
/// ```bash
/// docty accepts 'string[]' '["a", "b"]'
/// ```
#[derive(Parser)]
#[command(
    name = "docty",
    author,
    version,
    about = "Docblock type algebra CLI (docty)",
    long_about = "The 'docty' command parses docblock type annotations against a symbol manifest. \
It prints canonical type names, checks assignability between types and between types and values, \
and describes documented members of registered classes and interfaces."
)]
pub(crate) struct Cli {
    /// Path to the JSON symbol manifest.
    ///
    /// When absent, an empty symbol table is used.
    #[arg(long, env = "DOCTY_SYMBOLS", global = true)]
    pub(crate) symbols: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the canonical name of an annotation.
    Name {
        annotation: String,

        /// Class or interface whose imports resolve relative names.
        #[arg(long)]
        context: Option<String>,
    },

    /// Print whether TARGET is assignable from CANDIDATE.
    Check {
        target: String,
        candidate: String,

        /// Class or interface whose imports resolve relative names.
        #[arg(long)]
        context: Option<String>,
    },

    /// Print whether a JSON value is a member of an annotated type.
    ///
    /// An object of the form `{"$class": "Name"}` denotes an instance of the
    /// class `Name`; any other object is an array keyed by its property names.
    Accepts {
        annotation: String,
        json: String,

        /// Class or interface whose imports resolve relative names.
        #[arg(long)]
        context: Option<String>,
    },

    /// Print the documentation of a method, or of a property when MEMBER starts with `$`.
    Describe {
        #[arg(value_name = "TYPE")]
        ty: String,
        member: String,
    },
}
