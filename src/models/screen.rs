use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Registration,
    Home,
    Goal,
    Hours,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Login,
        Screen::Registration,
        Screen::Home,
        Screen::Goal,
        Screen::Hours,
    ];

    /// Reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Login | Screen::Registration)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Registration => "Registration",
            Screen::Home => "Home",
            Screen::Goal => "Goal",
            Screen::Hours => "Hours",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = AppError;

    /// Case-insensitive; also accepts the legacy route names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "login" => Ok(Screen::Login),
            "registration" | "register" | "cadastro" => Ok(Screen::Registration),
            "home" => Ok(Screen::Home),
            "goal" | "meta" => Ok(Screen::Goal),
            "hours" | "horas" => Ok(Screen::Hours),
            _ => Err(AppError::InvalidScreen(s.to_string())),
        }
    }
}
