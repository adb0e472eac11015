// SPDX-License-Identifier: MPL-2.0
//! Slideshow state machine.
//!
//! The slideshow never owns a timer. Starting it hands out a
//! [`SlideshowTick`] that the caller turns into a one-shot delayed callback;
//! when the callback fires the tick comes back and is checked with
//! [`Slideshow::accepts`]. Every start bumps a generation counter, so ticks
//! issued before a stop (or before a stop and restart) are recognized as stale.

use std::time::Duration;

/// Current slideshow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideshowState {
    /// No advance is scheduled.
    #[default]
    Stopped,
    /// Advancing automatically; only ticks of this generation are honored.
    Running { generation: u64 },
}

impl SlideshowState {
    /// Returns true if the slideshow is advancing automatically.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// A scheduled advance, to be delivered back after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowTick {
    generation: u64,
    delay: Duration,
}

impl SlideshowTick {
    /// Generation the tick was issued for.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    /// How long to wait before delivering the tick.
    #[must_use]
    pub fn delay(self) -> Duration {
        self.delay
    }
}

/// Timer-driven slideshow with generation-based cancellation.
#[derive(Debug, Clone)]
pub struct Slideshow {
    state: SlideshowState,
    last_generation: u64,
    interval: Duration,
}

impl Slideshow {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            state: SlideshowState::Stopped,
            last_generation: 0,
            interval,
        }
    }

    #[must_use]
    pub fn state(&self) -> SlideshowState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Moves `Stopped -> Running` under a fresh generation.
    ///
    /// Returns the tick for the first scheduled advance, or `None` when the
    /// slideshow was already running (nothing new is scheduled).
    pub fn start(&mut self) -> Option<SlideshowTick> {
        if self.is_running() {
            return None;
        }
        self.last_generation = self.last_generation.wrapping_add(1);
        self.state = SlideshowState::Running {
            generation: self.last_generation,
        };
        self.next_tick()
    }

    /// Moves `Running -> Stopped`. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = SlideshowState::Stopped;
        was_running
    }

    /// Returns true if `tick` belongs to the current run.
    #[must_use]
    pub fn accepts(&self, tick: SlideshowTick) -> bool {
        matches!(self.state, SlideshowState::Running { generation } if generation == tick.generation)
    }

    /// Issues the next tick of the current run, or `None` when stopped.
    #[must_use]
    pub fn next_tick(&self) -> Option<SlideshowTick> {
        match self.state {
            SlideshowState::Running { generation } => Some(SlideshowTick {
                generation,
                delay: self.interval,
            }),
            SlideshowState::Stopped => None,
        }
    }
}
