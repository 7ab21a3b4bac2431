use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::server;

/// Run the HTTP server until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.server_host = h.clone();
        }
        if let Some(p) = port {
            cfg.server_port = *p;
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Server(format!("cannot start runtime: {}", e)))?;

        runtime.block_on(server::run(cfg))?;
    }

    Ok(())
}
