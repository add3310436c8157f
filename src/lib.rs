pub mod codes;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
mod generic_structs;
pub mod handler;
pub mod league;
pub mod query;
pub mod table;

pub use config::Config;
pub use error::{FantasyError, Result};
pub use generic_structs::*;
pub use handler::{Command, Handler};
pub use league::League;
