//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `get_favicon` library that handles:
//! - Command-line argument parsing
//! - Layering the optional JSON config file and CLI flags over the defaults
//! - Logger initialization
//! - Writing the icon bytes and a one-line summary
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use get_favicon::config::Opt;
use get_favicon::initialization::init_logger_with;
use get_favicon::{ConfigOverrides, FaviconResolver, ResolverConfig};

fn build_config(opt: &Opt) -> Result<ResolverConfig> {
    let file_overrides = match opt.config.as_deref() {
        Some(path) => ConfigOverrides::from_json_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => ConfigOverrides::default(),
    };
    let cli_overrides = opt
        .overrides()
        .load_default_icon()
        .context("Failed to load default icon")?;
    Ok(ResolverConfig::merged(file_overrides.merge(cli_overrides)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = build_config(&opt)?;
    let resolver = FaviconResolver::new(config).context("Failed to initialize HTTP client")?;

    let result = match resolver.get_favicon(&opt.url).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("get-favicon error: {e}");
            process::exit(1);
        }
    };

    match opt.output.as_deref() {
        Some(path) => std::fs::write(path, &result.data)
            .with_context(|| format!("Failed to write icon to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&result.data)
                .and_then(|()| stdout.flush())
                .context("Failed to write icon to stdout")?;
        }
    }

    eprintln!(
        "{} {} byte{} from {} in {}ms",
        if result.is_default { "default icon:" } else { "icon:" },
        result.data.len(),
        if result.data.len() == 1 { "" } else { "s" },
        result.icon_url,
        result.spend_time
    );

    Ok(())
}
