pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod search;
pub mod session;
