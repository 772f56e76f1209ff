use crate::{
    config::SpinnerConfig,
    ease::Ease,
    geom::{ArcFrame, ArcSpan, GeometryState},
    renderer::{ArcRenderer, CycleEvent},
};

pub const NUM_POINTS: u32 = 5;
pub const DEGREE_360: f32 = 360.0;

/// Longest trim the arc group reaches within one cycle.
pub const MAX_SWEEP_DEGREES: f32 = 0.8 * DEGREE_360;
/// Rotation the whole group accumulates over `NUM_POINTS` cycles.
pub const FULL_GROUP_ROTATION: f32 = 3.0 * DEGREE_360;

/// Relative sweep lengths of the three trailing segments.
pub const SEGMENT_RATIOS: [f32; 3] = [1.0, 7.0 / 8.0, 5.0 / 8.0];

/// Cycle split: the start edge chases during the first half, the end edge
/// runs away during the second.
pub const START_TRIM_OFFSET: f32 = 0.5;
pub const END_TRIM_OFFSET: f32 = 1.0;

/// Material-style three-segment trailing-arc spinner.
///
/// Each cycle grows the arc by [`MAX_SWEEP_DEGREES`] (second half) and then
/// collapses it from behind (first half of the next sample ordering), while
/// three progressively shorter segments trail the leading edge. The whole
/// group also rotates, completing three full turns every five cycles.
#[derive(Clone, Debug)]
pub struct LevelRenderer {
    config: SpinnerConfig,
    state: GeometryState,
}

impl LevelRenderer {
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

    fn compute_start_trim(&mut self, progress: f32) {
        let s = &mut self.state;
        let t = progress / START_TRIM_OFFSET;
        s.start_deg = s.origin_start_deg + MAX_SWEEP_DEGREES * Ease::Material.apply(t);

        let swipe = s.end_deg - s.start_deg;
        let swipe_progress = swipe.abs() / MAX_SWEEP_DEGREES;

        let inc1 = Ease::Decelerate.apply(swipe_progress) - Ease::Linear.apply(swipe_progress);
        let inc3 = Ease::Accelerate.apply(swipe_progress) - Ease::Linear.apply(swipe_progress);

        s.segments[0] = -swipe * SEGMENT_RATIOS[0] * (1.0 + inc1);
        s.segments[1] = -swipe * SEGMENT_RATIOS[1];
        s.segments[2] = -swipe * SEGMENT_RATIOS[2] * (1.0 + inc3);
    }

    fn compute_end_trim(&mut self, progress: f32) {
        let s = &mut self.state;
        let u = (progress - START_TRIM_OFFSET) / (END_TRIM_OFFSET - START_TRIM_OFFSET);
        s.end_deg = s.origin_end_deg + MAX_SWEEP_DEGREES * Ease::Material.apply(u);

        let swipe = s.end_deg - s.start_deg;
        let swipe_progress = swipe.abs() / MAX_SWEEP_DEGREES;

        // Hand segments off to their resting lengths back-to-front as the
        // leading edge overtakes them.
        if swipe_progress > SEGMENT_RATIOS[1] {
            s.segments[0] = -swipe;
            s.segments[1] = MAX_SWEEP_DEGREES * SEGMENT_RATIOS[1];
            s.segments[2] = MAX_SWEEP_DEGREES * SEGMENT_RATIOS[2];
        } else if swipe_progress > SEGMENT_RATIOS[2] {
            s.segments[0] = 0.0;
            s.segments[1] = -swipe;
            s.segments[2] = MAX_SWEEP_DEGREES * SEGMENT_RATIOS[2];
        } else {
            s.segments[0] = 0.0;
            s.segments[1] = 0.0;
            s.segments[2] = -swipe;
        }
    }
}

impl ArcRenderer for LevelRenderer {
    fn compute_render(&mut self, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);

        if progress <= START_TRIM_OFFSET {
            self.compute_start_trim(progress);
        } else {
            self.compute_end_trim(progress);
        }

        self.state.group_rotation_deg = (FULL_GROUP_ROTATION / NUM_POINTS as f32) * progress
            + FULL_GROUP_ROTATION * (self.state.rotation_count as f32 / NUM_POINTS as f32);
    }

    fn handle(&mut self, event: CycleEvent) {
        match event {
            CycleEvent::Start => {
                self.state.rotation_count = 0;
            }
            CycleEvent::Repeat => {
                self.state.store_originals();
                self.state.rotation_count = (self.state.rotation_count + 1) % NUM_POINTS;
            }
        }
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn frame(&self) -> ArcFrame {
        let s = &self.state;
        let spans = s
            .segments
            .iter()
            .enumerate()
            .filter(|(_, sweep)| **sweep != 0.0)
            .map(|(slot, sweep)| ArcSpan {
                slot,
                start_deg: s.end_deg,
                sweep_deg: *sweep,
            })
            .collect();
        ArcFrame {
            spans,
            group_rotation_deg: s.group_rotation_deg,
        }
    }
}
