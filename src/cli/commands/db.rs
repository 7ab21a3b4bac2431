use crate::cli::commands::del::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{drop_calendar_tables, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
        drop,
        yes,
    } = cmd
    {
        // one connection for every requested action; schema untouched until asked
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) DROP
        //
        if *drop {
            if !*yes
                && !ask_confirmation(&format!(
                    "Drop every calendar table in {}? All events will be lost.",
                    cfg.database
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            println!("{}▶ Dropping calendar tables…{}", CYAN, RESET);
            drop_calendar_tables(&pool.conn)?;
            println!("{}✔ Tables dropped.{}\n", GREEN, RESET);
        }

        //
        // 2) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 3) INFO
        //
        if *show_info {
            run_pending_migrations(&pool.conn)?;
            stats::print_db_info(&pool.conn, &cfg.database)?;
        }

        //
        // 4) CHECK
        //
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

        //
        // 5) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        pool.close()?;
    }

    Ok(())
}
