pub mod commands;
pub mod constants;
pub mod core;
pub mod host;
pub mod models;
pub mod system;
