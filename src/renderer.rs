use crate::{
    config::SpinnerConfig,
    geom::ArcFrame,
    renderer_level::LevelRenderer,
    renderer_swing::SwingRenderer,
};

/// Timing-driver boundary events, delivered synchronously from the
/// frame-tick loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleEvent {
    /// First activation of the animation.
    Start,
    /// The progress value completed a full cycle and restarted.
    Repeat,
}

/// Per-frame arc computation capability. Exactly one `compute_render` call
/// happens per frame tick; `handle` is invoked for cycle boundaries before
/// the tick's computation.
pub trait ArcRenderer {
    fn compute_render(&mut self, progress: f32);

    fn handle(&mut self, event: CycleEvent);

    /// Clears all animated state. Driven by `start()`; stopping does not
    /// reset.
    fn reset(&mut self);

    /// Paint parameters for the current state.
    fn frame(&self) -> ArcFrame;
}

/// The two spinner strategies behind one dispatch point.
#[derive(Clone, Debug)]
pub enum Spinner {
    Level(LevelRenderer),
    Swing(SwingRenderer),
}

impl Spinner {
    pub fn level(config: SpinnerConfig) -> Self {
        Self::Level(LevelRenderer::new(config))
    }

    pub fn swing(config: SpinnerConfig) -> Self {
        Self::Swing(SwingRenderer::new(config))
    }

    pub fn config(&self) -> &SpinnerConfig {
        match self {
            Self::Level(r) => r.config(),
            Self::Swing(r) => r.config(),
        }
    }
}

impl ArcRenderer for Spinner {
    fn compute_render(&mut self, progress: f32) {
        match self {
            Self::Level(r) => r.compute_render(progress),
            Self::Swing(r) => r.compute_render(progress),
        }
    }

    fn handle(&mut self, event: CycleEvent) {
        match self {
            Self::Level(r) => r.handle(event),
            Self::Swing(r) => r.handle(event),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Level(r) => r.reset(),
            Self::Swing(r) => r.reset(),
        }
    }

    fn frame(&self) -> ArcFrame {
        match self {
            Self::Level(r) => r.frame(),
            Self::Swing(r) => r.frame(),
        }
    }
}
