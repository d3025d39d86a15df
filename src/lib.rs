pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layouts;
pub mod location;
pub mod plan;
pub mod planner;
pub mod stamps;

pub mod visual;
pub use visual::*;

pub use config::LayoutConfig;
pub use error::{ConfigError, ParseLayoutKindError};
pub use grid::GridSurface;
pub use plan::{AllianceId, LayoutPlan, LayoutSummary, Structure, StructureKind, Style};
pub use planner::{generate_layout, render_layout, LayoutDispatcher, LayoutKind};
