use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use remap_config::ConfigFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the JSON mapping config
    #[arg(short, long)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let requests = config.requests();

        println!("✓ {} is valid\n", self.config.display());
        println!(
            "  {} request{}:",
            requests.len(),
            if requests.len() == 1 { "" } else { "s" }
        );
        for request in requests {
            let arrow = if request.bidirectional { "<->" } else { "->" };
            println!("    {} {} {}", request.source, arrow, request.target);
        }

        Ok(())
    }
}
