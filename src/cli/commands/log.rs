use crate::cli::CliApp;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub async fn handle(cmd: &Commands, app: &CliApp) -> AppResult<()> {
    if let Commands::Log { print, logins } = cmd {
        if *print {
            let rows = app.store.read_log().await?;
            LogLogic::print_log(&rows);
        }

        if *logins {
            let entries = app.ctx.audit().dump_log().await;
            LogLogic::print_logins(&entries);
        }
    }

    Ok(())
}
