//! piggy_accounts - account store operator tool
//!
//! Opens the account database and runs a single command against it:
//!
//! ```text
//! piggy_accounts create <username>
//! piggy_accounts show <name>
//! piggy_accounts touch <name>
//! ```

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use piggy_accounts::repository::account;
use piggy_accounts::store::ACCOUNT_BUCKET;
use piggy_accounts::{Account, AppError, AppResult, Config, RocksStore, User};

/// Command given on the command line
#[derive(Debug)]
enum Command {
    Create(String),
    Show(String),
    Touch(String),
}

impl Command {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> AppResult<Self> {
        let verb = args
            .next()
            .ok_or_else(|| AppError::InvalidCommand("missing command".to_string()))?;
        let name = args
            .next()
            .ok_or_else(|| AppError::InvalidCommand(format!("{verb}: missing account name")))?;
        if let Some(extra) = args.next() {
            return Err(AppError::InvalidCommand(format!("unexpected argument: {extra}")));
        }

        match verb.as_str() {
            "create" => Ok(Command::Create(name)),
            "show" => Ok(Command::Show(name)),
            "touch" => Ok(Command::Touch(name)),
            other => Err(AppError::InvalidCommand(other.to_string())),
        }
    }
}

/// Initialize tracing/logging
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "piggy_accounts=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(store: &RocksStore, command: Command) -> AppResult<Account> {
    match command {
        Command::Create(username) => Ok(account::create(store, &User::new(username))?),
        Command::Show(name) => Ok(account::find_by_name(store, &name)?),
        Command::Touch(name) => {
            let mut found = account::find_by_name(store, &name)?;
            account::update(store, &mut found)?;
            Ok(found)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    let result = Command::parse(std::env::args().skip(1)).and_then(|command| {
        tracing::debug!("Opening store at {}", config.store_path.display());
        let store = RocksStore::open(&config.store_path, &[ACCOUNT_BUCKET])?;
        run(&store, command)
    });

    match result {
        Ok(account) => {
            let json = serde_json::to_string_pretty(&account).context("Failed to print account")?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            let body = serde_json::json!({
                "error": e.to_string(),
                "error_code": e.error_code(),
            });
            eprintln!("{body}");
            std::process::exit(e.exit_code());
        }
    }
}
