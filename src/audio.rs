//! Background "music".
//!
//! Started once, on the first thing the user does, and never waited on.
//! A failure to play is logged and otherwise ignored.

use std::io::Write;

#[derive(Debug)]
pub enum AudioError {
    /// The output refused the sound (closed pipe, not a terminal, ...).
    Output(std::io::Error),
    /// Sound is switched off for this session.
    Disabled,
}

impl From<std::io::Error> for AudioError {
    fn from(e: std::io::Error) -> Self {
        AudioError::Output(e)
    }
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::Output(e) => write!(f, "audio output failed: {}", e),
            AudioError::Disabled => write!(f, "audio is disabled"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Something that can start looping background sound.
pub trait Soundtrack {
    fn play(&mut self) -> Result<(), AudioError>;
}

/// Rings the terminal bell.  The closest thing a terminal has to music.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out }
    }
}

impl<W: Write> Soundtrack for TerminalBell<W> {
    fn play(&mut self) -> Result<(), AudioError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// No sound at all; every play request is rejected.
pub struct Silence;

impl Soundtrack for Silence {
    fn play(&mut self) -> Result<(), AudioError> {
        Err(AudioError::Disabled)
    }
}

/// Fire-and-forget start.  Errors are logged, never returned.
pub fn start(track: &mut dyn Soundtrack) {
    match track.play() {
        Ok(()) => log::info!("Background audio started"),
        Err(e) => log::warn!("Audio play error: {}", e),
    }
}
