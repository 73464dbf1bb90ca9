mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use scroller_api::ApiClient;
use scroller_core::AppCore;
use scroller_models::VoteKind;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(
            *shell,
            &mut Cli::command(),
            "scroller",
            &mut std::io::stdout(),
        );
        return;
    }

    let config = config::CliConfig::load();
    config.apply_api_key_env();

    // Logging goes to a rolling file so command output stays clean.
    let _guard = match init_logging(cli.verbose) {
        Ok(guard) => Some(guard),
        Err(_) => None,
    };

    if let Err(e) = run(cli, config).await {
        output::notify_error("Error", &format!("{e:#}"));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = scroller_storage::paths::ensure_data_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "scroller.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    Ok(guard)
}

async fn run(cli: Cli, config: config::CliConfig) -> Result<()> {
    let db_path = match cli.db_path.or_else(|| config.default.db_path.clone()) {
        Some(path) => path,
        None => scroller_storage::paths::db_path()?
            .to_string_lossy()
            .into_owned(),
    };

    tracing::debug!(db_path = %db_path, "Opening database");
    let (core, notifications) = AppCore::new(&db_path)?;
    let api = ApiClient::new(config.api_base(cli.api_base.as_deref()));
    let mut ctx = commands::Ctx {
        core,
        api,
        notifications,
    };

    match cli.command {
        Commands::Completions { .. } => unreachable!("handled before setup"),
        Commands::Login { email } => commands::auth::login(&ctx, email).await,
        Commands::Register { name, email } => commands::auth::register(&ctx, name, email).await,
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Feed { user } => commands::posts::feed(&ctx, user).await,
        Commands::Create(args) => commands::posts::create(&ctx, args).await,
        Commands::Comment { post_id, content } => {
            commands::posts::comment(&ctx, post_id, content).await
        }
        Commands::Like { post_id } => commands::posts::vote(&ctx, post_id, VoteKind::Like).await,
        Commands::Dislike { post_id } => {
            commands::posts::vote(&ctx, post_id, VoteKind::Dislike).await
        }
        Commands::Save { post_id } => commands::saved::toggle(&mut ctx, post_id),
        Commands::Saved => commands::saved::list(&ctx).await,
        Commands::Admin(command) => commands::admin::run(&ctx, command).await,
        Commands::Profile(command) => commands::profile::run(&ctx, command).await,
        Commands::Assist(command) => commands::assist::run(command).await,
    }
}
