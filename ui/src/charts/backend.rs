//! Pluggable drawing backends. Components build a `ChartConfig`; a backend owns the pixels.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::config::{ChartConfig, ChartKind};
use super::palette;

/// Chart.js build loaded by the launchers.
pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Returned by a backend once a chart has been handed off for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub mount_id: String,
    pub kind: ChartKind,
}

pub trait ChartBackend {
    fn draw(&self, mount_id: &str, config: &ChartConfig) -> ChartHandle;
}

/// Backend slot provided through context; defaults to Chart.js.
#[derive(Clone)]
pub struct ChartRenderer(pub Rc<dyn ChartBackend>);

impl ChartRenderer {
    pub fn new(backend: impl ChartBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub fn draw(&self, mount_id: &str, config: &ChartConfig) -> ChartHandle {
        self.0.draw(mount_id, config)
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(ChartJsBackend)
    }
}

/// Draws through Chart.js in the page by evaluating a small bootstrap script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    fn draw(&self, mount_id: &str, config: &ChartConfig) -> ChartHandle {
        let handle = ChartHandle {
            mount_id: mount_id.to_string(),
            kind: config.kind,
        };

        let script = match chart_js_script(mount_id, config) {
            Ok(script) => script,
            Err(err) => {
                warn!(mount_id, %err, "chart config failed to serialize");
                return handle;
            }
        };

        let eval = document::eval(&script);
        let id = mount_id.to_string();
        spawn(async move {
            match eval.await {
                Ok(drawn) if drawn == serde_json::Value::Bool(true) => {
                    debug!(mount_id = %id, "chart drawn")
                }
                Ok(_) => warn!(mount_id = %id, "chart mount or Chart.js unavailable"),
                Err(err) => warn!(mount_id = %id, ?err, "chart script failed"),
            }
        });

        handle
    }
}

/// Script body that waits for Chart.js, resolves gradient markers, and
/// replaces whatever chart already owns the canvas.
pub fn chart_js_script(mount_id: &str, config: &ChartConfig) -> Result<String, serde_json::Error> {
    let id = serde_json::to_string(mount_id)?;
    let config = serde_json::to_string(config)?;
    let text_color = serde_json::to_string(palette::DEFAULT_TEXT_COLOR)?;
    let border_color = serde_json::to_string(palette::DEFAULT_BORDER_COLOR)?;

    Ok(format!(
        r#"
for (let i = 0; i < 100 && typeof Chart === "undefined"; i++) {{
    await new Promise((resolve) => setTimeout(resolve, 50));
}}
const canvas = document.getElementById({id});
if (!canvas || typeof Chart === "undefined") {{
    return false;
}}
Chart.defaults.color = {text_color};
Chart.defaults.borderColor = {border_color};
const config = {config};
for (const dataset of config.data.datasets) {{
    const fill = dataset.backgroundColor && dataset.backgroundColor.gradient;
    if (fill) {{
        dataset.backgroundColor = (ctx) => {{
            const area = ctx.chart.chartArea;
            if (!area) {{
                return fill.axis;
            }}
            const gradient = ctx.chart.ctx.createLinearGradient(0, area.bottom, 0, area.top);
            gradient.addColorStop(0, fill.axis);
            gradient.addColorStop(1, fill.top);
            return gradient;
        }};
    }}
}}
const existing = Chart.getChart(canvas);
if (existing) {{
    existing.destroy();
}}
new Chart(canvas.getContext("2d"), config);
return true;
"#
    ))
}
