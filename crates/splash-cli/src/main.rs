//! # create-splash-lottie
//!
//! Writes the ReceiptKeeper splash animation to
//! `../assets/splash_animation.json` and prints where it went. Running it
//! without arguments always produces the same file.

use anyhow::{Context, Result};
use clap::Parser;
use receipt_splash::{SplashConfig, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "create-splash-lottie")]
#[command(about = "Generate the ReceiptKeeper splash screen Lottie animation")]
#[command(version)]
struct Cli {
    /// Output path for the animation JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Write the JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("receipt_splash=info,lottie_core=info,create_splash_lottie=info")
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = SplashConfig::default();
    tracing::debug!(?config, output = %cli.output.display(), "generating splash animation");

    let summary = receipt_splash::generate(&config, &cli.output, !cli.compact)
        .with_context(|| format!("could not generate {}", cli.output.display()))?;

    println!("{summary}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_stock_output() {
        let cli = Cli::try_parse_from(["create-splash-lottie"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("../assets/splash_animation.json"));
        assert!(!cli.compact);
        assert!(!cli.json_logs);
    }

    #[test]
    fn output_can_be_overridden() {
        let cli = Cli::try_parse_from(["create-splash-lottie", "-o", "out.json", "--compact"])
            .unwrap();
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert!(cli.compact);
    }
}
