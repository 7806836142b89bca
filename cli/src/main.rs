mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use img2ascii::{Converter, RasterPlatform};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Configure logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    // Reported once, on stderr, whatever the log level
    if let Err(e) = run(args).await {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}

fn failure_message(e: &anyhow::Error) -> String {
    format!("img2ascii: {e:#}")
}

async fn run(args: Args) -> Result<()> {
    let options = args.options()?;
    log::info!(
        "converting {} at width {} (height {})",
        args.source,
        options.width,
        options
            .height
            .map_or_else(|| "derived".to_string(), |h| h.to_string())
    );

    // The headless adapter is chosen here, once, for the whole process
    let converter = Converter::new(RasterPlatform::new());
    let art = converter
        .convert(args.source.as_str(), &options)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", e, e.category()))?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &art)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {} bytes to {}", art.len(), path.display());
        }
        None => print!("{art}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_is_one_line() {
        let e = anyhow::anyhow!("no such file").context("Failed to read ascii.toml");
        let message = failure_message(&e);
        assert_eq!(message, "img2ascii: Failed to read ascii.toml: no such file");
        assert_eq!(message.lines().count(), 1);
    }
}
