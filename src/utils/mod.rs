pub mod changelog;
pub mod checker;
pub mod config;
pub mod identity;
pub mod reader;
pub mod tooling;
