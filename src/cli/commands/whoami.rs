use crate::cli::CliApp;
use crate::errors::AppResult;
use crate::ui::messages::info;
use serde_json::Value;

pub async fn handle(app: &CliApp) -> AppResult<()> {
    match app.ctx.session().current_user().await {
        Some(Value::Object(map)) if map.contains_key("usuario") => {
            let name = map
                .get("usuario")
                .and_then(|u| u.as_str())
                .unwrap_or_default();
            println!("{}", name);
        }
        Some(other) => println!("{}", other),
        None => info("Not logged in"),
    }

    Ok(())
}
