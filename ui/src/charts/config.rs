//! Declarative chart configurations in Chart.js's shape.
//!
//! Builders here never touch the page; they only reshape snapshot slices into
//! labels and one numeric series, preserving input order.

use serde::Serialize;

use super::palette;
use crate::core::snapshot::{DailyPlays, HourlyPlays, LevelCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    pub fn values(&self) -> &[u64] {
        self.data
            .datasets
            .first()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    pub background_color: Paint,
    pub border_color: String,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(flatten)]
    pub points: Option<PointStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_border_width: u32,
    pub point_radius: u32,
}

/// Fill for a dataset. A gradient can't be expressed as JSON, so it travels as
/// a marker object that the backend turns into a canvas gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    Palette(Vec<String>),
    Gradient { gradient: GradientFill },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientFill {
    /// Colour at the value axis.
    pub axis: String,
    /// Colour at the top of the plot area.
    pub top: String,
}

impl GradientFill {
    pub fn accent() -> Self {
        Self {
            axis: palette::GRADIENT_AXIS.to_string(),
            top: palette::GRADIENT_TOP.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub padding: u32,
    pub use_point_style: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Plays per hour of day, labelled `"H:00"`.
pub fn hourly_chart(hours: &[HourlyPlays], series_label: &str) -> ChartConfig {
    let labels = hours.iter().map(|h| format!("{}:00", h.hour)).collect();
    let data = hours.iter().map(|h| h.plays).collect();

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: Some(series_label.to_string()),
                data,
                background_color: Paint::Gradient {
                    gradient: GradientFill::accent(),
                },
                border_color: palette::PRIMARY.to_string(),
                border_width: 1,
                border_radius: Some(4),
                fill: None,
                tension: None,
                points: None,
            }],
        },
        options: cartesian_options(),
    }
}

/// Plays per day, labelled with the day name as given.
pub fn daily_chart(days: &[DailyPlays], series_label: &str) -> ChartConfig {
    let labels = days.iter().map(|d| d.day.clone()).collect();
    let data = days.iter().map(|d| d.plays).collect();

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: Some(series_label.to_string()),
                data,
                background_color: Paint::Gradient {
                    gradient: GradientFill::accent(),
                },
                border_color: palette::PRIMARY.to_string(),
                border_width: 3,
                border_radius: None,
                fill: Some(true),
                tension: Some(0.4),
                points: Some(PointStyle {
                    point_background_color: palette::PRIMARY.to_string(),
                    point_border_color: palette::POINT_BORDER.to_string(),
                    point_border_width: 2,
                    point_radius: 6,
                }),
            }],
        },
        options: cartesian_options(),
    }
}

/// Users per subscription level.
pub fn levels_chart(levels: &[LevelCount]) -> ChartConfig {
    let labels = levels.iter().map(|l| l.level.clone()).collect();
    let data = levels.iter().map(|l| l.count).collect();

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: None,
                data,
                background_color: Paint::Palette(palette::category_colors(levels.len())),
                border_color: palette::DOUGHNUT_BORDER.to_string(),
                border_width: 3,
                border_radius: None,
                fill: None,
                tension: None,
                points: None,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend {
                    display: true,
                    position: Some("bottom".to_string()),
                    labels: Some(LegendLabels {
                        padding: 20,
                        use_point_style: true,
                    }),
                },
            },
            scales: None,
            cutout: Some("60%".to_string()),
        },
    }
}

fn cartesian_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        plugins: Plugins {
            legend: Legend {
                display: false,
                position: None,
                labels: None,
            },
        },
        scales: Some(Scales {
            x: Axis {
                begin_at_zero: None,
                grid: Grid {
                    display: Some(false),
                    color: None,
                },
            },
            y: Axis {
                begin_at_zero: Some(true),
                grid: Grid {
                    display: None,
                    color: Some(palette::GRID_COLOR.to_string()),
                },
            },
        }),
        cutout: None,
    }
}
