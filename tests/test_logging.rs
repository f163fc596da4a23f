use arena_shooter::logging::logs_reach_screen;

#[test]
fn no_filter_never_reaches_screen() {
    assert!(!logs_reach_screen(None, true));
    assert!(!logs_reach_screen(Some(""), true));
    assert!(!logs_reach_screen(Some("off"), true));
    assert!(!logs_reach_screen(Some(" OFF "), true));
}

#[test]
fn enabled_filter_on_terminal_stderr_reaches_screen() {
    assert!(logs_reach_screen(Some("debug"), true));
    assert!(logs_reach_screen(Some("arena_shooter=trace"), true));
}

#[test]
fn redirected_stderr_is_safe() {
    assert!(!logs_reach_screen(Some("debug"), false));
}
