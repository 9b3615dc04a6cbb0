use crate::cli::CliApp;
use crate::errors::AppResult;
use crate::models::screen::Screen;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{RESET, color_for_hours};

/// Weeks above this many hours are highlighted.
const HOURS_WARN_AT: f64 = 5.0;

pub async fn handle(app: &CliApp) -> AppResult<()> {
    if app.ctx.gate().request_navigate(Screen::Hours).await != Screen::Hours {
        warning("Log in to see the weekly hours");
        return Ok(());
    }

    let Some(hours) = app.ctx.app_data().load_weekly_hours().await else {
        info("No weekly hours stored");
        return Ok(());
    };

    let label_w = hours.keys().map(|k| k.len()).max().unwrap_or(4);
    let mut total = 0.0;

    for (week, value) in &hours {
        total += value;
        println!(
            "{:<label_w$} : {}{:>5.1}h{}",
            week,
            color_for_hours(*value, HOURS_WARN_AT),
            value,
            RESET,
            label_w = label_w
        );
    }
    println!("{:<label_w$} : {:>5.1}h", "total", total, label_w = label_w);

    Ok(())
}
