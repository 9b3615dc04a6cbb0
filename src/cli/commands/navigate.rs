use crate::cli::CliApp;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::screen::Screen;
use crate::ui::messages::warning;
use crate::utils::colors::colorize_screen;

pub async fn handle(cmd: &Commands, app: &CliApp) -> AppResult<()> {
    if let Commands::Navigate { screen } = cmd {
        let requested: Screen = screen.parse()?;
        let actual = app.ctx.gate().request_navigate(requested).await;

        if actual != requested {
            warning(format!("Not authenticated: {} redirected to {}", requested, actual));
        }
        println!("→ {}", colorize_screen(actual));
    }

    Ok(())
}
