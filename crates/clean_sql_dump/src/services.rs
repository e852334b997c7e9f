// crates/clean_sql_dump/src/services.rs

//! Presentation-layer seam for the "pause before closing" behaviour.
//!
//! The tool is meant to be double-clicked or run from an interactive
//! terminal, so the driver keeps the window open until Enter is pressed.
//! Headless callers (scripts, tests) set [`DISABLE_EXIT_PAUSE`] to skip the
//! pause instead of losing it silently.

use std::env;
use std::io::{self, Write};

/// Environment variable that disables the exit pause for headless runs.
pub const DISABLE_EXIT_PAUSE: &str = "DISABLE_EXIT_PAUSE";

/// Keeps the console open until the user dismisses it.
pub trait ExitPause {
    fn wait(&self) -> io::Result<()>;
}

/// Interactive pause: prompts and blocks until one line of stdin arrives.
pub struct StdinPause;

impl ExitPause for StdinPause {
    fn wait(&self) -> io::Result<()> {
        print!("Press Enter to exit...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(())
    }
}

/// Pause that returns immediately, for headless runs and tests.
pub struct NoPause;

impl ExitPause for NoPause {
    fn wait(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Selects the pause behaviour for this process: interactive unless
/// [`DISABLE_EXIT_PAUSE`] is set.
pub fn exit_pause() -> Box<dyn ExitPause> {
    if pause_disabled() {
        Box::new(NoPause)
    } else {
        Box::new(StdinPause)
    }
}

fn pause_disabled() -> bool {
    env::var(DISABLE_EXIT_PAUSE).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pause_returns_immediately() {
        NoPause.wait().expect("NoPause never fails");
    }

    /// With the variable set, the selected pause must not touch stdin.
    #[test]
    fn test_exit_pause_skips_waiting_when_disabled() {
        env::set_var(DISABLE_EXIT_PAUSE, "1");
        assert!(pause_disabled());
        exit_pause().wait().expect("disabled pause never blocks");

        env::remove_var(DISABLE_EXIT_PAUSE);
        assert!(!pause_disabled());
    }
}
