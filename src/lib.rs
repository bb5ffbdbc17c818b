//! parcoord renders parallel-coordinates charts.
//!
//! Every record becomes one polyline crossing a vertical axis per dimension. Each axis is
//! scaled to its own min/max, and lines can be colored explicitly or by a score mapped through
//! a named color scale, with high (or low) scores painted on top.
//!
//! - Build a [`ParCoord`] from records, or use [`parallel_coordinates`] for a one-shot chart
//! - Call [`ParCoord::plot`], then [`ParCoord::save_fig`] to write a PNG or SVG
//! - Describe charts as JSON with [`ChartDoc`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod foundation;
mod render;
mod style;

pub use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Rgba8Premul};
pub use crate::foundation::error::{ParcoordError, ParcoordResult};

pub use crate::chart::document::{ChartDoc, ScoresDoc};
pub use crate::chart::limits::AxisLimits;
pub use crate::chart::parcoord::{ColorBarOpts, ColorsArg, ParCoord, PlotOpts, ScoreOpts};
pub use crate::chart::quick::{QuickOpts, parallel_coordinates};
pub use crate::chart::ticks::AxisTicks;

pub use crate::style::color::{ColorDef, DEFAULT_CYCLE};
pub use crate::style::colormap::{Colormap, ColormapName};
pub use crate::style::norm::{NormKind, ScoreNorm};

pub use crate::render::backend::{FrameRGBA, RenderBackend};
pub use crate::render::cpu::{CpuBackend, CpuBackendOpts};
pub use crate::render::export::{OutputFormat, encode_png, write_png, write_svg};
pub use crate::render::fonts::FONT_DIR_ENV;
pub use crate::render::plan::{DrawOp, FontWeight, RenderPlan, TextAnchor, TextOp};
pub use crate::render::svg::render_svg;
