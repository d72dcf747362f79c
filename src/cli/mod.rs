//! Interactive command-line frontend
//!
//! This module bridges terminal input with the service layer: typed menu
//! commands, prompting, the bounded retry loop, and the session itself.

pub mod command;
pub mod prompt;
pub mod retry;
pub mod session;

pub use command::{Command, MenuChoice};
pub use prompt::Prompter;
pub use retry::{retry_bounded, Attempt, RetryOutcome};
pub use session::Session;

use crate::config::Settings;
use crate::error::LibraryResult;
use crate::services::LibraryService;

/// Run the menu loop on the process's stdin/stdout
pub fn run_terminal_session(service: &mut LibraryService, settings: &Settings) -> LibraryResult<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(service, stdin.lock(), stdout.lock(), settings.max_retries).run()
}
