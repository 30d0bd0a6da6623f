use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use remap_codegen::{ExtractOptions, Generator, Visibility};
use remap_config::ConfigFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON mapping config
    #[arg(short, long)]
    pub config: PathBuf,

    /// Path of the generated mapper file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Include interfaces that are not exported
    #[arg(long)]
    pub all_declarations: bool,

    /// Preview the generated mapper without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("failed to resolve working directory")?;
        let config_path = cwd.join(&self.config);
        let output_path = cwd.join(&self.output);

        let config = ConfigFile::open(&config_path).unwrap_or_exit();

        // request paths are written relative to the invoking directory;
        // resolve them before they reach the core
        let requests = config
            .into_requests()
            .into_iter()
            .map(|mut request| {
                request.source = cwd.join(&request.source).display().to_string();
                request.target = cwd.join(&request.target).display().to_string();
                request
            })
            .collect();

        let options = ExtractOptions {
            visibility: if self.all_declarations {
                Visibility::All
            } else {
                Visibility::ExportedOnly
            },
        };

        let mut generator = Generator::new(requests, options);

        if self.dry_run {
            let (content, report) = generator
                .preview(&output_path)
                .wrap_err("Failed to generate mappers")?;
            println!("── {} ──", output_path.display());
            println!("{}", content);
            println!("── Summary ──");
            println!(
                "{} mappers and {} imports would be generated",
                report.mappers, report.imports
            );
            return Ok(());
        }

        let report = generator
            .generate(&output_path)
            .wrap_err("Failed to generate mappers")?;

        for request in &report.skipped {
            eprintln!(
                "warning: skipping \"{}\" -> \"{}\": input file missing",
                request.source, request.target
            );
        }

        for request in &report.processed {
            println!(
                "Mapping from source: \"{}\" to target: \"{}\"",
                request.source, request.target
            );
            if request.bidirectional {
                println!(
                    "Mapping from source: \"{}\" to target: \"{}\"",
                    request.target, request.source
                );
            }
        }

        println!();
        println!(
            "Generated: {} ({} mappers, {} imports)",
            output_path.display(),
            report.mappers,
            report.imports
        );

        Ok(())
    }
}
