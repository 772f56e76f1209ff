use tracing::{debug, trace};

use crate::{
    geom::ArcFrame,
    renderer::{ArcRenderer, CycleEvent, Spinner},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatMode {
    /// Progress restarts at 0 after each cycle.
    Restart,
    /// Progress ping-pongs 0 -> 1 -> 0 across consecutive cycles.
    Reverse,
}

/// Renderer host: owns the cycle timing and feeds the active renderer one
/// progress sample per tick, interleaving cycle-boundary events.
///
/// Single-threaded and frame-driven; `advance` is the only place animated
/// state mutates. `start` resets and begins ticking, `stop` halts ticks
/// without resetting, so a later `start` always begins from zeroed state.
#[derive(Clone, Debug)]
pub struct SpinnerDriver {
    spinner: Spinner,
    repeat_mode: RepeatMode,
    duration_ms: u64,
    running: bool,
    elapsed_ms: u64,
    completed_cycles: u64,
}

impl SpinnerDriver {
    pub fn new(spinner: Spinner) -> Self {
        // The level widget's animator ran in REVERSE repeat mode; the swing
        // widget free-ran forward.
        let repeat_mode = match &spinner {
            Spinner::Level(_) => RepeatMode::Reverse,
            Spinner::Swing(_) => RepeatMode::Restart,
        };
        let duration_ms = spinner.config().duration_ms.max(1);
        Self {
            spinner,
            repeat_mode,
            duration_ms,
            running: false,
            elapsed_ms: 0,
            completed_cycles: 0,
        }
    }

    pub fn with_repeat_mode(mut self, mode: RepeatMode) -> Self {
        self.repeat_mode = mode;
        self
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resets all animated state and begins the tick sequence. Safe to call
    /// repeatedly; every call restarts from zeroed state.
    pub fn start(&mut self) {
        debug!(duration_ms = self.duration_ms, "spinner start");
        self.spinner.reset();
        self.elapsed_ms = 0;
        self.completed_cycles = 0;
        self.running = true;
        self.spinner.handle(CycleEvent::Start);
    }

    /// Halts ticking immediately. Animated state is left as-is; only a
    /// subsequent `start` resets it.
    pub fn stop(&mut self) {
        if self.running {
            debug!("spinner stop");
        }
        self.running = false;
    }

    /// One frame tick: advances elapsed time, applies one `Repeat` event
    /// per cycle boundary crossed, then computes and returns the frame.
    /// Returns `None` while stopped.
    pub fn advance(&mut self, delta_ms: u64) -> Option<ArcFrame> {
        if !self.running {
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        let cycles = self.elapsed_ms / self.duration_ms;
        while self.completed_cycles < cycles {
            self.completed_cycles += 1;
            trace!(cycle = self.completed_cycles, "cycle repeat");
            self.spinner.handle(CycleEvent::Repeat);
        }

        self.spinner.compute_render(self.progress());
        Some(self.spinner.frame())
    }

    /// Current paint parameters without advancing time.
    pub fn frame(&self) -> ArcFrame {
        self.spinner.frame()
    }

    /// Progress within the current cycle, folded when ping-ponging.
    pub fn progress(&self) -> f32 {
        let pos = (self.elapsed_ms % self.duration_ms) as f32 / self.duration_ms as f32;
        match self.repeat_mode {
            RepeatMode::Restart => pos,
            RepeatMode::Reverse => {
                if self.completed_cycles % 2 == 0 {
                    pos
                } else {
                    1.0 - pos
                }
            }
        }
    }
}
