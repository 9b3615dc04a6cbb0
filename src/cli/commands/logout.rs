use crate::cli::CliApp;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub async fn handle(app: &CliApp) -> AppResult<()> {
    let session = app.ctx.session();
    let who = session
        .current_user()
        .await
        .and_then(|v| v.get("usuario").and_then(|u| u.as_str()).map(str::to_string))
        .unwrap_or_default();

    session.logout().await?;

    success("Logged out");
    app.log_op("logout", &who, "Session marker removed").await;
    Ok(())
}
