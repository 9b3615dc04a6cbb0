pub mod app_data;
pub mod audit;
pub mod bootstrap;
pub mod clock;
pub mod context;
pub mod gate;
pub mod log;
pub mod seed;
pub mod session;
