use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{DEFAULT_MANAGER_EMAIL, seed_defaults};
use crate::db::log::audit;
use crate::db::queries::count_employees;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `init` command
///
/// Creates the config directory and file, the SQLite database with all
/// migrations, and seeds holidays plus a default manager.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rPonto…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let store = SqliteStore::open(&cfg.database)?;
    seed_defaults(store.conn())?;

    println!("✅ Database initialized at {}", &cfg.database);
    info(format!("Default manager: {DEFAULT_MANAGER_EMAIL}"));
    info(format!("Registered employees: {}", count_employees(store.conn())?));

    if let Err(e) = audit(
        store.conn(),
        "init",
        "database",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 rPonto initialization completed!");
    Ok(())
}
