//! Site configuration.
//!
//! Every knob has a default matching the shipped `static/index.html`. A page
//! may override any subset through an inline JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "dataUrl": "/portfolio.json", "network": { "nodeCount": 80 } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::PortfolioError;

/// Id of the optional inline JSON block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tuning for the neural-network canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkParams {
    pub node_count: usize,
    /// Velocities are drawn from `(-max_speed / 2, max_speed / 2)` per axis.
    pub max_speed: f64,
    pub connection_probability: f64,
    pub max_connection_opacity: f64,
    pub node_radius: f64,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            node_count: 50,
            max_speed: 0.5,
            connection_probability: 0.05,
            max_connection_opacity: 0.3,
            node_radius: 2.0,
        }
    }
}

/// Tuning for the brain-wave canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveParams {
    pub wave_count: usize,
    pub min_amplitude: f64,
    pub amplitude_spread: f64,
    pub min_frequency: f64,
    pub frequency_spread: f64,
    /// Radians added to every wave's phase once per frame.
    pub phase_step: f64,
    pub base_alpha: f64,
    pub alpha_falloff: f64,
    pub line_width: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_count: 5,
            min_amplitude: 20.0,
            amplitude_spread: 30.0,
            min_frequency: 0.01,
            frequency_spread: 0.02,
            phase_step: 0.02,
            base_alpha: 0.3,
            alpha_falloff: 0.05,
            line_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub data_url: String,
    pub network_canvas_id: String,
    pub wave_canvas_id: String,
    pub timeline_container_id: String,
    pub awards_container_id: String,
    pub navbar_id: String,
    /// Visible fraction at which timeline items and award cards fade in.
    pub reveal_threshold: f64,
    /// Visible fraction at which counters and skill bars start.
    pub stat_threshold: f64,
    pub counter_duration_ms: f64,
    /// Assumed frame interval used to size each counter increment.
    pub counter_frame_ms: f64,
    pub skill_bar_delay_ms: u32,
    /// `scrollY` beyond which the navbar is marked `scrolled`.
    pub navbar_scroll_offset: f64,
    pub network: NetworkParams,
    pub waves: WaveParams,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_url: "data/portfolio.json".to_string(),
            network_canvas_id: "neuralNetwork".to_string(),
            wave_canvas_id: "brainVisualization".to_string(),
            timeline_container_id: "timeline-container".to_string(),
            awards_container_id: "awards-container".to_string(),
            navbar_id: "navbar".to_string(),
            reveal_threshold: 0.2,
            stat_threshold: 0.5,
            counter_duration_ms: 2000.0,
            counter_frame_ms: 16.0,
            skill_bar_delay_ms: 100,
            navbar_scroll_offset: 100.0,
            network: NetworkParams::default(),
            waves: WaveParams::default(),
        }
    }
}

impl SiteConfig {
    /// Parses an override document; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_json::from_str(raw)?;
        Ok(cfg.sanitized())
    }

    /// Pulls overrides the canvas would reject back into range.
    fn sanitized(mut self) -> Self {
        // CanvasRenderingContext2D.arc throws on a negative radius; max also maps NaN to 0.
        self.network.node_radius = self.network.node_radius.max(0.0);
        self.waves.line_width = self.waves.line_width.max(0.0);
        self
    }
}
