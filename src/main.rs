//! Imgur Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use imgur_downloader::{
    api::ImgurApi,
    cli::{confirm_album, prompt_target, Args},
    config::{parse_album_id, parse_target, validate_config, Config},
    download::{download_account, download_album, HttpFetcher, RunResult},
    error::{exit_codes, Error, Result},
    output::{
        format_run_summary, print_banner, print_config_summary, print_error, print_info,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_)
                | Error::RateLimited(_)
                | Error::Api(_)
                | Error::AlbumNotFound(_)
                | Error::AccountNotFound(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = match Config::locate(args.config.as_deref()) {
        Some(path) => Config::load(&path)?,
        None => {
            print_warning("Configuration file not found");
            print_info("Using default configuration with CLI arguments");
            Config::default()
        }
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    print_config_summary(
        &args.albums,
        &config.options.folder_naming.to_string(),
        &config.download_directory().display().to_string(),
    );

    let api = ImgurApi::new(config.client.id.clone(), &config.options.user_agent)?;
    let fetcher = HttpFetcher::new(&config.options.user_agent)?;

    // Without album arguments, ask for an account (or album) interactively
    if args.albums.is_empty() {
        let target = parse_target(&prompt_target()?)?;
        let confirm = args.confirm;

        let summary = download_account(&api, &fetcher, &config, &target, |album| {
            !confirm || confirm_album(album)
        })
        .await?;

        return Ok(if summary.albums_failed > 0 {
            exit_codes::SOME_ALBUMS_FAILED
        } else {
            exit_codes::SUCCESS
        });
    }

    let mut totals = RunResult::default();
    let mut albums_failed = 0u64;

    for raw in &args.albums {
        let album_id = match parse_album_id(raw) {
            Ok(id) => id,
            Err(e) => {
                print_error(&format!("Skipping '{}': {}", raw, e));
                albums_failed += 1;
                continue;
            }
        };

        match download_album(&api, &fetcher, &config, &album_id).await {
            Ok(result) => totals += result,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                print_error(&format!("Failed to download album {}: {}", album_id, e));
                albums_failed += 1;
            }
        }
    }

    if args.albums.len() > 1 {
        print_info(&format!(
            "Parsed {} albums. {}",
            args.albums.len(),
            format_run_summary(&totals)
        ));
    }

    if albums_failed > 0 {
        print_warning(&format!("{} album(s) failed", albums_failed));
        return Ok(exit_codes::SOME_ALBUMS_FAILED);
    }

    Ok(exit_codes::SUCCESS)
}
