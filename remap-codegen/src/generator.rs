//! Generation orchestration.
//!
//! Processes validated requests in config order, folding each request's
//! imports and plans into one run-wide artifact, then renders and writes it
//! through a single sink. Strictly single-threaded and synchronous; nothing
//! survives past the emitted artifact.

use std::collections::HashMap;
use std::path::Path;

use eyre::Result;
use remap_core::{paths, write_file};
use remap_ir::{GeneratedArtifact, MappingRequest};
use remap_schema::{ExtractOptions, FileSchemas, extract_file};

use crate::imports::ImportAggregator;
use crate::infer::infer_all;
use crate::render::TypeScriptRenderer;

/// Summary of one generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Requests that produced mapping plans, in processing order.
    pub processed: Vec<MappingRequest>,
    /// Requests skipped because a source or target file was missing.
    pub skipped: Vec<MappingRequest>,
    /// Number of mapper functions in the artifact.
    pub mappers: usize,
    /// Number of import statements in the artifact.
    pub imports: usize,
}

/// Drives one generation run.
pub struct Generator {
    requests: Vec<MappingRequest>,
    options: ExtractOptions,
    /// Extraction cache keyed by file location: one parse per distinct file,
    /// however many requests reference it.
    cache: HashMap<String, FileSchemas>,
}

impl Generator {
    /// Create a generator over validated requests.
    pub fn new(requests: Vec<MappingRequest>, options: ExtractOptions) -> Self {
        Self {
            requests,
            options,
            cache: HashMap::new(),
        }
    }

    /// Assemble and render the artifact without touching the output sink.
    ///
    /// `output` is the location the artifact is destined for; import
    /// specifiers are computed relative to it.
    pub fn preview(&mut self, output: &Path) -> Result<(String, GenerateReport)> {
        let location = paths::normalize(&output.to_string_lossy());
        let (artifact, report) = self.assemble(&location)?;
        Ok((TypeScriptRenderer::new().render_artifact(&artifact), report))
    }

    /// Generate the artifact and write it to `output`.
    pub fn generate(&mut self, output: &Path) -> Result<GenerateReport> {
        let (content, report) = self.preview(output)?;
        write_file(output, &content)?;
        Ok(report)
    }

    fn assemble(&mut self, output: &str) -> Result<(GeneratedArtifact, GenerateReport)> {
        let mut aggregator = ImportAggregator::new(output);
        let mut mappers = Vec::new();
        let mut report = GenerateReport::default();

        for request in self.requests.clone() {
            // a request with a missing input is skipped, not fatal
            if !Path::new(&request.source).exists() || !Path::new(&request.target).exists() {
                report.skipped.push(request);
                continue;
            }

            let source = self.extract_cached(&request.source)?;
            let target = self.extract_cached(&request.target)?;

            aggregator.add_entity_import(&request.source, &source.entity_names());
            aggregator.add_entity_import(&request.target, &target.entity_names());
            aggregator.add_declarations(&source.imports);
            aggregator.add_declarations(&target.imports);

            mappers.extend(infer_all(&source.entities, &target.entities));
            if request.bidirectional {
                mappers.extend(infer_all(&target.entities, &source.entities));
            }
            report.processed.push(request);
        }

        report.mappers = mappers.len();
        report.imports = aggregator.len();

        let artifact = GeneratedArtifact {
            imports: aggregator.into_statements(),
            mappers,
        };
        Ok((artifact, report))
    }

    fn extract_cached(&mut self, location: &str) -> Result<FileSchemas> {
        if let Some(hit) = self.cache.get(location) {
            return Ok(hit.clone());
        }
        let schemas = extract_file(location, self.options)?;
        self.cache.insert(location.to_string(), schemas.clone());
        Ok(schemas)
    }
}
