use crate::core::session::SessionManager;
use crate::models::screen::Screen;
use tracing::info;

/// Decides where a navigation request actually lands.
///
/// The session is re-read on every request; nothing is cached between calls.
#[derive(Clone)]
pub struct NavigationGate {
    session: SessionManager,
}

impl NavigationGate {
    pub fn new(session: SessionManager) -> Self {
        Self { session }
    }

    /// Public screens always pass. Anything else needs a session and is
    /// rewritten to [`Screen::Login`] otherwise, including when the session
    /// cannot be read.
    pub async fn request_navigate(&self, destination: Screen) -> Screen {
        if destination.is_public() {
            return destination;
        }

        if self.session.is_authenticated().await {
            destination
        } else {
            info!(requested = %destination, "not authenticated, redirecting to Login");
            Screen::Login
        }
    }

    /// Screen shown right after startup.
    pub async fn initial_screen(&self) -> Screen {
        if self.session.is_authenticated().await {
            Screen::Home
        } else {
            Screen::Login
        }
    }
}
