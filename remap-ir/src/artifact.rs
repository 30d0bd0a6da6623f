//! The assembled output of one generation run.

use crate::MappingPlan;

/// Everything the renderer needs for one run: the deduplicated import block
/// and the ordered mapper plans.
///
/// Write-once: the orchestrator assembles it while folding requests, hands it
/// to the renderer, and no state survives past the emitted text.
#[derive(Debug, Clone, Default)]
pub struct GeneratedArtifact {
    /// Final import statement texts, deduplicated, first occurrence first.
    pub imports: Vec<String>,
    /// Mapping plans in generation order.
    pub mappers: Vec<MappingPlan>,
}
