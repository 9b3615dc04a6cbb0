use crate::cli::CliApp;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub async fn handle(cmd: &Commands, app: &CliApp) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let session = app.ctx.session();
        let user = session.login(&app.ctx.audit(), username, password).await?;

        success(format!("Logged in as {}", user.usuario));
        app.log_op("login", &user.usuario, "Login succeeded").await;
    }

    Ok(())
}
