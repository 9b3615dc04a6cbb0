use crate::cli::CliApp;
use crate::core::bootstrap::initialize_app;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, RED, RESET, colorize_screen};

/// Run the startup sequence and report where the app would open.
pub async fn handle(app: &CliApp) -> AppResult<()> {
    let start = initialize_app(&app.ctx).await;
    let authenticated = app.ctx.session().is_authenticated().await;
    let logins = app.ctx.audit().dump_log().await;

    header("Session status");

    if authenticated {
        println!("Authenticated : {GREEN}yes{RESET}");
    } else {
        println!("Authenticated : {RED}no{RESET}");
    }
    println!("Start screen  : {}", colorize_screen(start));
    println!(
        "Login log     : {}/{} entries",
        logins.len(),
        app.ctx.audit().cap()
    );

    Ok(())
}
