//! Tracing configuration.
//!
//! Library crates emit `tracing` events (union canonicalization, name
//! resolution, lazy docblock parsing). They are shown only when requested:
//!
//! ```bash
//! DOCTY_LOG=debug docty name 'int|null'
//! DOCTY_LOG=doctype_types=trace DOCTY_LOG_FORMAT=json docty name 'int|null'
//! ```
//!
//! `DOCTY_LOG` takes precedence over `RUST_LOG`. All output goes to stderr so it
//! never mixes with command results on stdout.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "DOCTY_LOG";
const LOG_FORMAT_ENV: &str = "DOCTY_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV)
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

fn build_filter() -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(directives)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Installs the global subscriber. Does nothing unless `DOCTY_LOG` or
/// `RUST_LOG` is set.
pub(crate) fn init_tracing() {
    if std::env::var_os(LOG_ENV).is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
