use crate::{
    config::SpinnerConfig,
    ease::Ease,
    geom::{ArcFrame, ArcSpan, GeometryState},
    renderer::{ArcRenderer, CycleEvent},
};

/// Full pendulum range; the drawn sweep folds symmetrically at half of it.
pub const MAX_SWING_DEGREES: i32 = 180;

/// Start-angle travel per cycle. Spanning 720 degrees makes one cycle
/// cover two laps of the ring.
pub const START_ANGLE_FROM: i32 = -90;
pub const START_ANGLE_TO: i32 = 630;

/// Near-linear S-curve driving the start angle.
pub const SWING_CURVE: Ease = Ease::CubicBezier {
    x1: 0.43,
    y1: 0.37,
    x2: 0.57,
    y2: 0.63,
};

/// Triangular fold: values past the halfway point mirror back down, so the
/// sweep grows to 90 and shrinks again within one cycle.
pub fn fold_swing(value: i32) -> i32 {
    if value > MAX_SWING_DEGREES / 2 {
        MAX_SWING_DEGREES - value
    } else {
        value
    }
}

/// Pendulum-swing single-arc spinner.
///
/// Two animators over the same cycle: the start angle sweeps `[-90, 630]`
/// through [`SWING_CURVE`], and the sweep length rises linearly over
/// `[1, 179]` before folding back down. Values quantize to whole degrees
/// like the integer animators of the original widget.
#[derive(Clone, Debug)]
pub struct SwingRenderer {
    config: SpinnerConfig,
    state: GeometryState,
}

impl SwingRenderer {
    pub fn new(config: SpinnerConfig) -> Self {
        Self {
            config,
            state: GeometryState::default(),
        }
    }

    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    pub fn state(&self) -> &GeometryState {
        &self.state
    }

    pub fn start_angle(&self) -> i32 {
        self.state.start_deg as i32
    }

    pub fn swing_angle(&self) -> i32 {
        self.state.segments[0] as i32
    }

    fn start_angle_at(progress: f32) -> i32 {
        let span = (START_ANGLE_TO - START_ANGLE_FROM) as f32;
        (START_ANGLE_FROM as f32 + span * SWING_CURVE.apply(progress)) as i32
    }

    fn swing_angle_at(progress: f32) -> i32 {
        let from = 1;
        let to = MAX_SWING_DEGREES - 1;
        let raw = (from as f32 + (to - from) as f32 * progress) as i32;
        fold_swing(raw)
    }
}

impl ArcRenderer for SwingRenderer {
    fn compute_render(&mut self, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);
        self.state.start_deg = Self::start_angle_at(progress) as f32;
        self.state.segments[0] = Self::swing_angle_at(progress) as f32;
    }

    fn handle(&mut self, _event: CycleEvent) {
        // No per-cycle bookkeeping: both animators restart cleanly at the
        // wrap, and the 720-degree start range lands where it took off.
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn frame(&self) -> ArcFrame {
        let s = &self.state;
        let spans = if s.segments[0] != 0.0 {
            vec![ArcSpan {
                slot: 0,
                start_deg: s.start_deg,
                sweep_deg: s.segments[0],
            }]
        } else {
            Vec::new()
        };
        ArcFrame {
            spans,
            group_rotation_deg: 0.0,
        }
    }
}
