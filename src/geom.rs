use kurbo::{Arc, Point, Vec2};

use crate::core::Bounds;

/// Mutable angle state owned by one renderer instance. Angles are degrees
/// and unbounded; values past 360 represent continuous wrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryState {
    pub start_deg: f32,
    pub end_deg: f32,
    /// Snapshots taken at the last repeat boundary; immutable for the rest
    /// of the cycle.
    pub origin_start_deg: f32,
    pub origin_end_deg: f32,
    /// Per-slot sweep lengths; sign is the sweep direction.
    pub segments: [f32; 3],
    pub group_rotation_deg: f32,
    pub rotation_count: u32,
}

impl GeometryState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot both origins to the current end angle and restart the next
    /// cycle's trim from there.
    pub fn store_originals(&mut self) {
        self.origin_end_deg = self.end_deg;
        self.origin_start_deg = self.end_deg;
        self.start_deg = self.end_deg;
    }
}

/// One arc to stroke: a color slot plus start/sweep in degrees, relative to
/// the caller's bounds and inset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcSpan {
    pub slot: usize,
    pub start_deg: f32,
    pub sweep_deg: f32,
}

impl ArcSpan {
    /// Converts the span to a drawable [`kurbo::Arc`] centered in `bounds`,
    /// with the stroke centerline pulled in by `inset` on every side.
    pub fn to_arc(self, bounds: Bounds, inset: f32) -> Arc {
        let cx = f64::from(bounds.width) / 2.0;
        let cy = f64::from(bounds.height) / 2.0;
        let rx = (cx - f64::from(inset)).max(0.0);
        let ry = (cy - f64::from(inset)).max(0.0);
        Arc {
            center: Point::new(cx, cy),
            radii: Vec2::new(rx, ry),
            start_angle: f64::from(self.start_deg).to_radians(),
            sweep_angle: f64::from(self.sweep_deg).to_radians(),
            x_rotation: 0.0,
        }
    }
}

/// Per-frame paint parameters sampled by the rendering surface: the spans
/// to stroke, in draw order, plus a rotation applied to the whole group
/// about the bounds center.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcFrame {
    pub spans: Vec<ArcSpan>,
    pub group_rotation_deg: f32,
}
