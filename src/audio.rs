//! Sound effects.  The game only ever asks for one: the player's shot.

use std::io::Write;

pub trait Audio {
    /// Fire-and-forget; nothing waits on playback.
    fn play_fire_sound(&mut self);
}

/// Plays the shot as the terminal bell.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Audio for TerminalBell<W> {
    fn play_fire_sound(&mut self) {
        // Playback failures are not worth interrupting a frame for.
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::trace!("bell failed: {e}");
        }
    }
}
