use crate::core::context::AppContext;
use crate::models::screen::Screen;
use tracing::error;

/// Startup sequence: seed the default records, then pick the first screen.
///
/// A seeding failure is logged and startup continues; the worst outcome
/// is landing on Login.
pub async fn initialize_app(ctx: &AppContext) -> Screen {
    if let Err(e) = ctx.seeder().seed_defaults().await {
        error!(error = %e, "failed to seed default records");
    }

    ctx.gate().initial_screen().await
}
