use crate::cli::CliApp;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::seed::SeedPolicy;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
///  - the default records, according to the seed policy
pub async fn handle(cli: &Cli, seed: Option<SeedPolicy>) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.db.clone(), cli.test)?;
    if let Some(policy) = seed {
        cfg.seed_policy = policy;
    }

    println!("⚙️  Initializing rSessionGate…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let app = CliApp::open(cfg)?;

    app.log_op(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", app.store.path()),
    )
    .await;

    let seeder = app.ctx.seeder();
    let report = seeder.seed_defaults().await?;

    success(format!(
        "Default records seeded ({:?}): {} written, {} kept",
        seeder.policy(),
        report.written.len(),
        report.kept.len()
    ));

    app.log_op(
        "seed",
        &format!("{:?}", seeder.policy()),
        &format!(
            "written: [{}] kept: [{}]",
            report.written.join(", "),
            report.kept.join(", ")
        ),
    )
    .await;

    println!("🎉 rSessionGate initialization completed!");
    Ok(())
}
