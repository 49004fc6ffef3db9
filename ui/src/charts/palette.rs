//! Chart colours. Bar and line charts share the purple accent and gradient fill.

pub const PRIMARY: &str = "#8b5cf6";

/// Gradient stops, axis end first.
pub const GRADIENT_AXIS: &str = "rgba(139, 92, 246, 0.8)";
pub const GRADIENT_TOP: &str = "rgba(139, 92, 246, 0.1)";

pub const GRID_COLOR: &str = "rgba(139, 92, 246, 0.1)";
pub const DEFAULT_TEXT_COLOR: &str = "#a0aec0";
pub const DEFAULT_BORDER_COLOR: &str = "rgba(139, 92, 246, 0.2)";

pub const POINT_BORDER: &str = "#fff";
pub const DOUGHNUT_BORDER: &str = "#16213e";

pub const CATEGORY_PALETTE: [&str; 6] = [
    "#8b5cf6", "#06b6d4", "#10b981", "#f59e0b", "#ef4444", "#ec4899",
];

/// First `count` palette entries. Categories past the palette get no colour of
/// their own and fall back to the chart library default.
pub fn category_colors(count: usize) -> Vec<String> {
    CATEGORY_PALETTE
        .iter()
        .take(count)
        .map(|c| c.to_string())
        .collect()
}
