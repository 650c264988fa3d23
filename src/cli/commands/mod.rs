pub mod analyze;
pub mod config;
pub mod distribution;
pub mod init;
