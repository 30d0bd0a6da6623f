//! Mapping inference and TypeScript mapper generation.
//!
//! This crate is the algorithmic core of remap. Given the entities declared
//! in a source and a target file, the inference engine classifies every
//! target property as auto-mappable or custom-map-required, the import
//! aggregator assembles the deduplicated import block the artifact needs,
//! and the generator folds the per-request results into one rendered output.
//!
//! # Usage
//!
//! ```ignore
//! use remap_codegen::{ExtractOptions, Generator};
//! use remap_config::ConfigFile;
//! use std::path::Path;
//!
//! let config = ConfigFile::open("mapping.json")?;
//! let mut generator = Generator::new(config.into_requests(), ExtractOptions::default());
//! let report = generator.generate(Path::new("src/generated/mapper.ts"))?;
//! ```

mod builder;
mod generator;
mod imports;
mod render;

pub mod infer;

pub use builder::CodeBuilder;
pub use generator::{GenerateReport, Generator};
pub use imports::{Import, ImportAggregator};
pub use remap_schema::{ExtractOptions, Visibility};
pub use render::TypeScriptRenderer;
