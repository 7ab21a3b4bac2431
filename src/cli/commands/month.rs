use crate::calendar::YearMonth;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolve_month_detailed;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::calendar_view::render_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { period, json } = cmd {
        let month = match period {
            Some(p) => YearMonth::parse_period(p)?,
            None => YearMonth::current(),
        };
        let layout = cfg.layout()?;

        let pool = DbPool::open(&cfg.database)?;
        let res = resolve_month_detailed(&pool, month)?;

        if *json {
            let out = serde_json::to_string_pretty(&res.events)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print!("{}", render_month(&res, layout));
        }
    }

    Ok(())
}
