use clap::Parser;
use tracing_subscriber::EnvFilter;
use velofix::{cli, config, errors};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = run(cli).await;

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: cli::Cli) -> Result<(), errors::VelofixError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        cli::Commands::Catalog(args) => {
            cli::catalog::handle_catalog(args, &cli::load_config(config_path).await?).await
        }
        cli::Commands::Mechanics(args) => cli::mechanics::handle_mechanics(args).await,
        cli::Commands::Quote(args) => {
            cli::quote::handle_quote(args, &cli::load_config(config_path).await?).await
        }
        cli::Commands::Diagnose(args) => {
            cli::diagnose::handle_diagnose(args, &cli::load_config(config_path).await?).await
        }
        cli::Commands::Wizard => {
            cli::wizard::handle_wizard(&cli::load_config(config_path).await?).await
        }
        cli::Commands::Serve(args) => {
            cli::serve::handle_serve(args, &cli::load_config(config_path).await?).await
        }
        cli::Commands::Validate(args) => handle_validate(&args).await,
    }
}

async fn handle_validate(args: &cli::commands::ValidateArgs) -> Result<(), errors::VelofixError> {
    let path = std::path::PathBuf::from(&args.config);
    let config = config::parse_config(&path).await?;
    // A config that points at a broken catalog is not valid either
    let catalog = velofix::catalog::resolve_catalog(&config).await?;
    println!("Configuration is valid: {} ({} catalog entries)", args.config, catalog.len());
    Ok(())
}
