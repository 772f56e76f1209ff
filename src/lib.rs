#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod driver;
pub mod ease;
pub mod error;
pub mod geom;
pub mod renderer;
pub mod renderer_level;
pub mod renderer_swing;

pub use config::{SpinnerConfig, SpinnerOverrides};
pub use self::core::{Bounds, Rgba8};
pub use driver::{RepeatMode, SpinnerDriver};
pub use ease::Ease;
pub use error::{SpinError, SpinResult};
pub use geom::{ArcFrame, ArcSpan, GeometryState};
pub use renderer::{ArcRenderer, CycleEvent, Spinner};
pub use renderer_level::LevelRenderer;
pub use renderer_swing::SwingRenderer;
