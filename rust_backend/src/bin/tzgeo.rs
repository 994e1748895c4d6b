//! tzgeo command line tool
//!
//! Queries the timezone engine and prints JSON to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin tzgeo --features cli -- resolve 51.5 -0.1
//! cargo run --bin tzgeo --features cli -- classify Europe/London --at 2024-06-15T12:00:00Z
//! cargo run --bin tzgeo --features cli -- terminator
//! cargo run --bin tzgeo --features cli -- path America/Detroit --width 1440 --height 720
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info). Logs go to stderr.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::json;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use tzgeo_rust::config::EngineConfig;
use tzgeo_rust::core::GeoPoint;
use tzgeo_rust::geometry::Equirectangular;
use tzgeo_rust::TimezoneEngine;

/// Timezone lookup, day/night and local-time classification
#[derive(Debug, clap::Parser)]
#[command(author, long_about = None, name = "tzgeo", version)]
struct Cli {
    /// Configuration file (defaults to tzgeo.toml if present)
    #[arg(long, global = true, value_name = "Path")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Resolve a coordinate to a region
    Resolve {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Classify a region's local time
    Classify {
        id: String,
        /// RFC 3339 instant (defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Subsolar point and terminator curve
    Terminator {
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Whether a coordinate is in daylight
    Lit {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Display color of a region
    Color { id: String },
    /// Boundary path on a whole-world equirectangular map
    Path {
        id: String,
        #[arg(long, default_value_t = 1000.0)]
        width: f64,
        #[arg(long, default_value_t = 500.0)]
        height: f64,
    },
    /// Identifiers sharing a region's boundary
    Related { id: String },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(EngineConfig::from_default_location().unwrap_or_else(|e| {
            debug!("{}; using defaults", e);
            EngineConfig::default()
        })),
    }
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = TimezoneEngine::with_config(load_config(cli.config.as_ref())?)?;
    // the only place a wall clock is read
    let now = Utc::now;

    let output = match cli.command {
        Command::Resolve { lat, lng } => serde_json::to_value(engine.resolve(lat, lng)?)?,
        Command::Classify { id, at } => {
            serde_json::to_value(engine.classify(&id, at.unwrap_or_else(now))?)?
        }
        Command::Terminator { at } => serde_json::to_value(engine.terminator(at.unwrap_or_else(now)))?,
        Command::Lit { lat, lng, at } => {
            let point = GeoPoint::new(lat, lng)?;
            json!({ "lit": engine.is_lit(point, at.unwrap_or_else(now)) })
        }
        Command::Color { id } => json!({ "id": &id, "color": engine.color_for(&id) }),
        Command::Path { id, width, height } => {
            let projection = Equirectangular::world(width, height);
            json!({ "id": &id, "path": engine.boundary_path(&id, &projection)? })
        }
        Command::Related { id } => json!({
            "id": &id,
            "canonical": engine.catalog().canonical_id(&id)?,
            "related": engine.related_ids(&id)?,
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
