use tracing::trace;

use crate::error::ChartResult;
use crate::render::{Color, Renderer};

use super::validation::{validate_bar_spacing, validate_font_family, validate_palette};
use super::{BarChartView, BarPalette, InvalidationTopic};

impl<R: Renderer> BarChartView<R> {
    #[must_use]
    pub fn bar_color(&self) -> Color {
        self.config.bar_color
    }

    /// Default fill for bars without a palette override.
    pub fn set_bar_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.config.bar_color = color;
        trace!(?color, "set bar color");
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    #[must_use]
    pub fn bar_colors(&self) -> Option<&[Color]> {
        self.config.bar_colors.as_deref()
    }

    /// Per-bar overrides, cycled when shorter than the data. `None` or an
    /// empty palette falls back to `bar_color` for every bar.
    pub fn set_bar_colors(&mut self, colors: Option<Vec<Color>>) -> ChartResult<()> {
        if let Some(colors) = &colors {
            validate_palette(colors)?;
        }
        trace!(count = ?colors.as_ref().map(Vec::len), "set bar palette");
        self.config.bar_colors = colors.map(BarPalette::from_vec);
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    #[must_use]
    pub fn bar_spacing(&self) -> f64 {
        self.config.bar_spacing
    }

    pub fn set_bar_spacing(&mut self, spacing: f64) -> ChartResult<()> {
        self.config.bar_spacing = validate_bar_spacing(spacing)?;
        trace!(spacing, "set bar spacing");
        self.invalidate(InvalidationTopic::Layout);
        Ok(())
    }

    #[must_use]
    pub fn track_color(&self) -> Color {
        self.config.track_color
    }

    /// Fill of the full-height column drawn behind each bar.
    pub fn set_track_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.config.track_color = color;
        trace!(?color, "set track color");
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    #[must_use]
    pub fn round_to_pixel(&self) -> bool {
        self.config.round_to_pixel
    }

    pub fn set_round_to_pixel(&mut self, enabled: bool) {
        self.config.round_to_pixel = enabled;
        self.invalidate(InvalidationTopic::Layout);
    }

    #[must_use]
    pub fn label_color(&self) -> Color {
        self.config.label_color
    }

    pub fn set_label_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.config.label_color = color;
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }

    #[must_use]
    pub fn label_font_family(&self) -> &str {
        &self.config.label_font_family
    }

    pub fn set_label_font_family(&mut self, family: impl Into<String>) -> ChartResult<()> {
        let family = family.into();
        validate_font_family(&family)?;
        self.config.label_font_family = family;
        self.invalidate(InvalidationTopic::Style);
        Ok(())
    }
}
