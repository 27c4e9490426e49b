use std::path::PathBuf;

use clap::Parser;
use lexis_config::Config;
use lexis_core::{Store, VocabularySession};
use tracing_subscriber::EnvFilter;

pub mod events;
pub mod io;
pub mod menu;
pub mod state;

use self::io::Console;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "lexis", about = "Vocabulary trainer with a shared word pool", version)]
struct Cli {
    /// Directory for vocabulary files (overrides LEXIS_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Start as this user instead of asking
    #[arg(long, short)]
    user: Option<String>,

    /// Enable the translation provider regardless of TRANSLATOR_ENABLED
    #[arg(long)]
    translate: bool,

    /// Log session activity to stderr
    #[arg(long, short)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

/// Filter used when `RUST_LOG` is unset. Quiet by default so logs stay out of the menu.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,lexis_core=debug,lexis_app=debug,lexis_translator=debug"
    } else {
        "warn"
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let mut config = Config::new();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(user) = cli.user {
        config.default_user = Some(user);
    }
    if cli.translate {
        config.translator.enabled = true;
    }

    let mut session = VocabularySession::open(Store::new(&config.data_dir));

    match lexis_translator::provider_from_config(&config.translator) {
        Ok(Some(provider)) => {
            session = session.with_translator(
                provider,
                config.translator.from_lang.clone(),
                config.translator.to_lang.clone(),
            );
        }
        Ok(None) => tracing::debug!("Translation disabled"),
        Err(e) => tracing::error!("Translation unavailable: {}", e),
    }

    let mut console = Console::stdio();

    let user = match config.default_user.clone() {
        Some(user) => user,
        None => match events::ask_user_name(&mut console).await? {
            Some(user) => user,
            None => return Ok(()),
        },
    };

    let mut state = AppState::new(session, user);
    events::event_loop(&mut state, &mut console).await
}
