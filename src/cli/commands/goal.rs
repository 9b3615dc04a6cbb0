use crate::cli::CliApp;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::goal::Goal;
use crate::models::screen::Screen;
use crate::ui::messages::{info, success, warning};

pub async fn handle(cmd: &Commands, app: &CliApp) -> AppResult<()> {
    if let Commands::Goal { name, value } = cmd {
        if app.ctx.gate().request_navigate(Screen::Goal).await != Screen::Goal {
            warning("Log in to see the goal");
            return Ok(());
        }

        let data = app.ctx.app_data();

        if let (Some(nome), Some(valor)) = (name, value) {
            let goal = Goal {
                nome: nome.clone(),
                valor: *valor,
            };
            data.save_goal(&goal).await?;
            success(format!("Goal updated: {} ({})", goal.nome, goal.valor));
            app.log_op("goal", &goal.nome, &format!("Goal value set to {}", goal.valor))
                .await;
            return Ok(());
        }

        match data.load_goal().await {
            Some(goal) => println!("🎯 {}: {}", goal.nome, goal.valor),
            None => info("No goal stored"),
        }
    }

    Ok(())
}
