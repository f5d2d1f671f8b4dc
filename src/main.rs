//! Roomgen - describe a room, get photorealistic furnished-room images.

use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roomgen::cli::Cli;
use roomgen::config::{discover_config_path, Config};
use roomgen::context::{ServiceContext, CASSETTE_DIR};
use roomgen::output::save_images;
use roomgen::params::validate_count;
use roomgen::prompt::{compose_prompt, STYLE_PRESETS};
use roomgen::{Provider, RoomGenError};

#[tokio::main]
async fn main() {
    // Keys may live in a local .env.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("failed to load .env: {e}"),
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "roomgen=debug" } else { "roomgen=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<(), RoomGenError> {
    if cli.list_styles {
        for (key, description) in STYLE_PRESETS {
            println!("{key:<14} {description}");
        }
        return Ok(());
    }

    let config_path = discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path)?;

    let design = cli.design(&config.defaults);
    let prompt = compose_prompt(&design);

    if cli.print_prompt {
        println!("{prompt}");
        return Ok(());
    }

    let provider: Provider =
        cli.provider.as_deref().unwrap_or(config.defaults.provider.as_str()).parse()?;
    let size = cli.size.clone().unwrap_or_else(|| config.defaults.size.clone());
    let count = cli.count.unwrap_or(config.defaults.count);
    validate_count(count)?;

    tracing::debug!(%provider, %size, count, style = %design.style, "resolved request");
    tracing::debug!(%prompt, "composed prompt");

    // Live, recording, or replaying.
    let replay_path = std::env::var("ROOMGEN_REPLAY").ok();
    let is_recording = std::env::var("ROOMGEN_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette) = replay_path {
        tracing::debug!(%cassette, "replay mode");
        (ServiceContext::replaying(Path::new(cassette), provider)?, None)
    } else {
        let credentials =
            config.credentials(provider, cli.api_key.as_deref(), cli.model.as_deref());
        if is_recording {
            tracing::debug!("recording mode");
            let (ctx, session) =
                ServiceContext::recording(&credentials, Path::new(CASSETTE_DIR))?;
            (ctx, Some(session))
        } else {
            (ServiceContext::live(&credentials)?, None)
        }
    };

    let result = ctx.generator.generate_image(&prompt, &size, count).await;
    drop(ctx);

    // Keep the cassette even when the call failed.
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => tracing::warn!("failed to save cassette: {e}"),
        }
    }

    let response = result?;
    let paths =
        save_images(&response.images, Path::new(&cli.output_dir), &design.style, &design.room_type)?;
    for path in &paths {
        eprintln!("Saved: {}", path.display());
    }

    Ok(())
}
