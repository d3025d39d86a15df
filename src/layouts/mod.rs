pub mod corner;
pub mod ring;

pub use corner::CornerLayout;
pub use ring::RingLayout;

use crate::config::LayoutConfig;
use crate::plan::Structure;
use crate::planner::LayoutKind;

/// A layout generator turns configuration constants into an ordered list of
/// structures.
///
/// Generators are stateless and never look at a grid: the same configuration
/// always yields the same sequence. Callers validate the configuration first.
pub trait LayoutGenerator {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    fn generate(&self, config: &LayoutConfig) -> Vec<Structure>;
}

/// The generator that implements a layout kind.
pub fn generator_for(kind: LayoutKind) -> Box<dyn LayoutGenerator> {
    match kind {
        LayoutKind::Corner => Box::new(CornerLayout),
        LayoutKind::Ring => Box::new(RingLayout),
    }
}
