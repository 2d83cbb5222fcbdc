//! # Trichroma - 3-SAT → 3-COLORING Toolbox
//!
//! The main binary for the Trichroma reduction and solving engine.
//!
//! This application provides:
//! - `reduce` - turn a 3-SAT instance file into a 3-coloring graph file
//! - `solve`  - decide 3-colorability of a graph file with a chosen strategy
//! - `show`   - print a loaded graph
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          apps/trichroma (THE BINARY)         │
//! │                                              │
//! │   CLI (clap) ──► commands ──► text formats   │
//! │                      │                       │
//! │                      ▼                       │
//! │            trichroma-core (THE LOGIC)        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! trichroma reduce -i instance.txt -o graph.txt
//! trichroma solve -i graph.txt -s back-tracking
//! trichroma solve -i graph.txt -s propagating --show
//! trichroma show -i graph.txt
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing — TRICHROMA_LOG_FORMAT=json enables machine-parseable
    // output. The subscriber lives here; the library only emits events.
    let log_format = std::env::var("TRICHROMA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "trichroma=debug,trichroma_core=debug"
    } else {
        "trichroma=info,trichroma_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    if !cli.quiet {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Trichroma startup banner.
fn print_banner() {
    println!(
        r#"
  Trichroma v{}

  3-SAT → 3-COLORING • Deterministic • Certificate-Checked
"#,
        env!("CARGO_PKG_VERSION")
    );
}
