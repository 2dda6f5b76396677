// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the trend chart geometry and rendering API.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod mapper;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod trend;
pub mod types;

pub use axis::YearAxis;
pub use chart::{ChartLayout, Marker, RenderOptions, TrendChart};
pub use error::{ChartError, ChartResult};
pub use geometry::{Point, Rect, Segment};
pub use hover::{HoverState, PointerEvent, Tooltip};
pub use mapper::ChartGeometryMapper;
pub use series::Observations;
pub use theme::Theme;
pub use trend::{LinearFit, TrendSource};
pub use types::PlotArea;
