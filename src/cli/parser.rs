use crate::core::seed::SeedPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSessionGate
#[derive(Parser)]
#[command(
    name = "rsessiongate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Local session store, login audit log and navigation gate on top of a persisted key/value store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, the configuration and the default records
    Init {
        #[arg(
            long = "seed",
            value_enum,
            help = "Seed policy for this run (overrides the configuration)"
        )]
        seed: Option<SeedPolicy>,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Log in with a stored credential
    Login { username: String, password: String },

    /// Add a new credential
    Register { username: String, password: String },

    /// Remove the session marker
    Logout,

    /// Print the logged-in user
    Whoami,

    /// Show session state and the screen shown at startup
    Status,

    /// Resolve where a navigation request lands
    Navigate {
        /// Destination: login, registration, home, goal, hours
        screen: String,
    },

    /// Show or replace the savings goal
    Goal {
        #[arg(long = "name", requires = "value", help = "New goal name")]
        name: Option<String>,

        #[arg(long = "value", requires = "name", help = "New goal value")]
        value: Option<f64>,
    },

    /// Show the weekly hours table
    Hours,

    /// Print the internal log or the login audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "logins", help = "Print the login audit log")]
        logins: bool,
    },
}
