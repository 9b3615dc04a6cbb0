pub mod config;
pub mod goal;
pub mod hours;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod navigate;
pub mod register;
pub mod status;
pub mod whoami;
