use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recalc::RecalcLogic;
use crate::db::migrate::{applied_count, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        recalc,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!(
                "{}✔ Migration completed ({} applied).{}\n",
                GREEN,
                applied_count(&pool.conn)?,
                RESET
            );
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *recalc {
            println!("{}▶ Recomputing stored hours…{}", CYAN, RESET);
            let report = RecalcLogic::recalc_all(&pool)?;

            for (id, raw) in &report.malformed {
                warning(format!("Record #{id}: malformed time '{raw}', stored hours kept"));
            }

            println!(
                "{}✔ {} records scanned, {} updated.{}\n",
                GREEN, report.scanned, report.updated, RESET
            );
        }
    }

    Ok(())
}
