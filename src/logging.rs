//! Logger setup.  Output goes to stderr, which shares the terminal with the
//! alternate screen unless it is redirected.

use crossterm::tty::IsTty;

/// Environment variable holding the `env_logger` filter.
pub const FILTER_ENV: &str = "RUST_LOG";

/// True when log lines would be printed over the game screen: some filter
/// enables logging and stderr is still the terminal.
pub fn logs_reach_screen(filter: Option<&str>, stderr_is_tty: bool) -> bool {
    let enabled = filter
        .map(str::trim)
        .map_or(false, |f| !f.is_empty() && !f.eq_ignore_ascii_case("off"));
    enabled && stderr_is_tty
}

/// Install `env_logger` (silent unless `RUST_LOG` is set) and warn when its
/// output would land on the game screen.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let filter = std::env::var(FILTER_ENV).ok();
    if logs_reach_screen(filter.as_deref(), std::io::stderr().is_tty()) {
        log::warn!("{FILTER_ENV} is set but stderr is the terminal; redirect it (2>log.txt) or log lines will overwrite the game");
    }
}
