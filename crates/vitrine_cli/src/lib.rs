//! Vitrine CLI support
//!
//! Configuration loading, catalog resolution and scenario replay behind the
//! `vitrine` binary.

pub mod config;
pub mod replay;
pub mod scenario;

use anyhow::{Context, Result};
use std::path::Path;
use vitrine_carousel::{Carousel, Catalog, MediaDescriptor};

pub use config::VitrineConfig;
pub use replay::{Replay, ReplayReport, ReplaySummary, TimedOutput, WidgetOutput};
pub use scenario::{Scenario, ScenarioStep};

/// Load a store file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Catalog::from_json(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve the entry selected by `query`
pub fn resolve(catalog: &Catalog, query: &str, config: &VitrineConfig) -> Result<Vec<MediaDescriptor>> {
    catalog
        .resolve_query(query, &config.carousel.asset_host)
        .with_context(|| format!("Failed to resolve {query:?}"))
}

/// Replay `scenario`. Items come from the store entry when one is given,
/// from the scenario otherwise.
pub fn replay(
    scenario: &Scenario,
    config: &VitrineConfig,
    store: Option<(&Catalog, &str)>,
) -> Result<ReplayReport> {
    let carousel = match store {
        Some((catalog, query)) => Carousel::from_catalog(catalog, query, config.carousel.clone()),
        None => Carousel::new(scenario.items.clone(), config.carousel.clone()),
    };
    tracing::info!(items = carousel.items().len(), steps = scenario.steps.len(), "replaying");
    Replay::new(carousel, config).run(scenario)
}
