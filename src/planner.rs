//! Public API for generating and rendering fortress layouts.
//!
//! `generate_layout` is the pure entry point. `render_layout` also paints the
//! result onto any [`GridRenderer`], and `LayoutDispatcher` keeps a grid
//! surface around across repeated renders.

use crate::config::LayoutConfig;
use crate::error::{ConfigError, ParseLayoutKindError};
use crate::grid::GridSurface;
use crate::layouts::generator_for;
use crate::plan::LayoutPlan;
use crate::visual::GridRenderer;
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export key types for convenience
pub use crate::plan::{AllianceId, LayoutSummary, Structure, StructureKind, Style};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Corner,
    Ring,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 2] = [LayoutKind::Corner, LayoutKind::Ring];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Corner => "corner",
            LayoutKind::Ring => "ring",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = ParseLayoutKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        LayoutKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(selector))
            .ok_or_else(|| ParseLayoutKindError(s.to_string()))
    }
}

/// Compute a layout without painting it.
pub fn generate_layout(kind: LayoutKind, config: &LayoutConfig) -> Result<LayoutPlan, ConfigError> {
    config.validate()?;

    let generator = generator_for(kind);
    let structures = generator.generate(config);

    debug!(
        "Generated '{}' layout with {} structures",
        generator.name(),
        structures.len()
    );

    Ok(LayoutPlan {
        kind,
        grid_width: config.grid_width,
        grid_height: config.grid_height,
        structures,
    })
}

/// Clear a renderer and paint a freshly generated layout onto it.
pub fn render_layout<R: GridRenderer + ?Sized>(
    kind: LayoutKind,
    config: &LayoutConfig,
    renderer: &mut R,
) -> Result<LayoutPlan, ConfigError> {
    let plan = generate_layout(kind, config)?;
    renderer.clear();
    plan.visualize(renderer);
    Ok(plan)
}

/// Owns the grid surface for successive render passes.
pub struct LayoutDispatcher {
    config: LayoutConfig,
    grid: GridSurface,
}

impl LayoutDispatcher {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = GridSurface::new(config.grid_width, config.grid_height)?;
        Ok(LayoutDispatcher { config, grid })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridSurface {
        &self.grid
    }

    /// Reset the grid and paint the selected layout. Nothing from a previous
    /// dispatch survives.
    pub fn dispatch(&mut self, kind: LayoutKind) -> Result<LayoutPlan, ConfigError> {
        self.grid
            .reset(self.config.grid_width, self.config.grid_height)?;
        let plan = render_layout(kind, &self.config, &mut self.grid)?;

        info!(
            "Rendered '{}' layout: {} structures, {} tiles painted",
            kind,
            plan.structures.len(),
            self.grid.painted_count()
        );

        Ok(plan)
    }

    /// Parse a selector and dispatch it.
    pub fn dispatch_named(&mut self, selector: &str) -> Result<LayoutPlan, anyhow::Error> {
        let kind: LayoutKind = selector.parse()?;
        Ok(self.dispatch(kind)?)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_parse_case_insensitively() {
        assert_eq!("corner".parse::<LayoutKind>(), Ok(LayoutKind::Corner));
        assert_eq!(" Ring ".parse::<LayoutKind>(), Ok(LayoutKind::Ring));
        assert_eq!(
            "hex".parse::<LayoutKind>(),
            Err(ParseLayoutKindError("hex".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in LayoutKind::ALL {
            assert_eq!(kind.to_string().parse::<LayoutKind>(), Ok(kind));
        }
    }

    #[test]
    fn invalid_config_fails_before_generating() {
        let config = LayoutConfig::default().with_grid_size(100, 0);
        assert!(matches!(
            generate_layout(LayoutKind::Ring, &config),
            Err(ConfigError::InvalidGridDimensions { .. })
        ));
        assert!(LayoutDispatcher::new(config).is_err());
    }

    #[test]
    fn runaway_spacing_is_rejected_instead_of_overflowing() {
        let config = LayoutConfig {
            furnace_spacing: 1_000_000_000,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            generate_layout(LayoutKind::Corner, &config),
            Err(ConfigError::InvalidStructureSize {
                name: "furnace spacing",
                ..
            })
        ));
    }

    #[test]
    fn unknown_selector_is_reported_by_the_dispatcher() {
        let mut dispatcher = LayoutDispatcher::new(LayoutConfig::default()).unwrap();
        let err = dispatcher.dispatch_named("spiral").unwrap_err();

        assert!(err.to_string().contains("spiral"));
        assert!(dispatcher.grid().is_clear());
    }
}
