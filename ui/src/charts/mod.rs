//! Chart configuration and drawing.

mod backend;
mod config;
pub mod palette;
mod view;

pub use backend::{chart_js_script, ChartBackend, ChartHandle, ChartJsBackend, ChartRenderer, CHART_JS_SRC};
pub use config::{
    daily_chart, hourly_chart, levels_chart, Axis, ChartConfig, ChartData, ChartKind, ChartOptions,
    Dataset, GradientFill, Grid, Legend, LegendLabels, Paint, Plugins, PointStyle, Scales,
};
pub use view::{ChartCanvas, ChartCard, ChartLibrary};
