use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::render::{Color, TextPrimitive};

/// Per-index fill overrides, cycled by `index mod len`.
pub type BarPalette = SmallVec<[Color; 4]>;

/// Complete chart state consumed by the scene builder.
///
/// This type is serializable so host applications can load chart setup from
/// their own configuration files without an ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default)]
    pub data: Vec<f64>,
    /// `None` disables the label row.
    #[serde(default)]
    pub x_labels: Option<Vec<String>>,
    /// Fixed ceiling, only used when `auto_max` is off.
    #[serde(default)]
    pub max: f64,
    #[serde(default = "default_auto_max")]
    pub auto_max: bool,
    #[serde(default = "default_bar_color")]
    pub bar_color: Color,
    #[serde(default)]
    pub bar_colors: Option<BarPalette>,
    #[serde(default = "default_bar_spacing")]
    pub bar_spacing: f64,
    #[serde(default = "default_track_color")]
    pub track_color: Color,
    #[serde(default = "default_round_to_pixel")]
    pub round_to_pixel: bool,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_family")]
    pub label_font_family: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            x_labels: None,
            max: 0.0,
            auto_max: default_auto_max(),
            bar_color: default_bar_color(),
            bar_colors: None,
            bar_spacing: default_bar_spacing(),
            track_color: default_track_color(),
            round_to_pixel: default_round_to_pixel(),
            label_color: default_label_color(),
            label_font_family: default_label_font_family(),
        }
    }
}

impl BarChartConfig {
    /// Sample chart used by design-time previews and demos.
    #[must_use]
    pub fn preview() -> Self {
        Self::default()
            .with_data(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0])
            .with_x_labels(
                ["T", "E", "A", "C", "h", "a", "r", "t"]
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            )
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<f64>) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_x_labels(mut self, labels: Vec<String>) -> Self {
        self.x_labels = Some(labels);
        self
    }

    /// Switches to a fixed ceiling and disables auto-max.
    #[must_use]
    pub fn with_fixed_max(mut self, max: f64) -> Self {
        self.max = max;
        self.auto_max = false;
        self
    }

    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub fn with_bar_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.bar_colors = Some(colors.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_bar_spacing(mut self, spacing: f64) -> Self {
        self.bar_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    #[must_use]
    pub fn with_round_to_pixel(mut self, enabled: bool) -> Self {
        self.round_to_pixel = enabled;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn with_label_font_family(mut self, family: impl Into<String>) -> Self {
        self.label_font_family = family.into();
        self
    }

    /// Palette slice, empty when no overrides are configured.
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        self.bar_colors.as_deref().unwrap_or(&[])
    }
}

fn default_auto_max() -> bool {
    true
}

fn default_bar_color() -> Color {
    Color::from_rgb8(106, 175, 232)
}

fn default_bar_spacing() -> f64 {
    8.0
}

fn default_track_color() -> Color {
    Color::white(0.97)
}

fn default_round_to_pixel() -> bool {
    true
}

fn default_label_color() -> Color {
    Color::white(0.56)
}

fn default_label_font_family() -> String {
    TextPrimitive::DEFAULT_FONT_FAMILY.to_owned()
}

#[cfg(test)]
mod tests {
    use super::BarChartConfig;
    use crate::render::Color;

    #[test]
    fn defaults_match_stock_widget() {
        let config = BarChartConfig::default();
        assert!(config.data.is_empty());
        assert!(config.x_labels.is_none());
        assert!(config.auto_max);
        assert!(config.round_to_pixel);
        assert_eq!(config.bar_spacing, 8.0);
        assert_eq!(config.bar_color, Color::from_rgb8(106, 175, 232));
        assert_eq!(config.track_color, Color::white(0.97));
        assert!(config.palette().is_empty());
    }

    #[test]
    fn preview_has_matching_labels() {
        let config = BarChartConfig::preview();
        assert_eq!(config.data.len(), 8);
        assert_eq!(config.x_labels.as_ref().map(Vec::len), Some(8));
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let config: BarChartConfig =
            serde_json::from_str(r#"{"data":[1.0,2.0],"bar_spacing":2.0}"#).expect("parse");
        assert_eq!(config.data, vec![1.0, 2.0]);
        assert_eq!(config.bar_spacing, 2.0);
        assert!(config.auto_max);
        assert_eq!(config.label_color, Color::white(0.56));
    }
}
