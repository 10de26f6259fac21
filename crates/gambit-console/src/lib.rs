//! Console front end for gambit: a two-player game over stdin and stdout.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use config::SessionConfig;
pub use error::ConsoleError;
pub use session::Session;
