use crate::cli::CliApp;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub async fn handle(cmd: &Commands, app: &CliApp) -> AppResult<()> {
    if let Commands::Register { username, password } = cmd {
        app.ctx.session().register(username, password).await?;

        success(format!("User {} registered", username.trim()));
        app.log_op("register", username.trim(), "User registered").await;
    }

    Ok(())
}
