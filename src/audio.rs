//! Audio triggers emitted by the simulation.
//!
//! The core only records *what happened*; an [`AudioSink`] decides whether
//! anything is heard. The simulation never depends on a sink being present.

use std::io::Write;

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioEvent {
    ShotFired,
    /// An enemy or aircraft blew up ("boom").
    EnemyDestroyed,
    /// A hazard popped ("punch").
    HazardDestroyed,
    PlayerDestroyed,
}

pub trait AudioSink {
    fn play(&mut self, event: AudioEvent);

    /// Fade the background music out over `millis`.
    fn fade_out(&mut self, _millis: u64) {}
}

/// No audio backend: every trigger is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: AudioEvent) {}
}

/// Rings the terminal bell for explosions. Write failures are ignored;
/// sound is never allowed to interrupt a frame.
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

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::EnemyDestroyed | AudioEvent::HazardDestroyed | AudioEvent::PlayerDestroyed => {
                if self.out.write_all(b"\x07").and_then(|_| self.out.flush()).is_err() {
                    debug!("bell unavailable, dropping {event:?}");
                }
            }
            AudioEvent::ShotFired => {}
        }
    }

    fn fade_out(&mut self, millis: u64) {
        debug!("audio fade-out over {millis} ms");
    }
}
