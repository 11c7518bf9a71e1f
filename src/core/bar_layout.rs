use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Ratio of the label font size reserved as gap between bars and labels.
pub const LABEL_TOP_MARGIN_RATIO: f64 = 0.33;

/// Resolves the y-axis ceiling used for scaling bar heights.
///
/// With `auto_max` the ceiling is the largest value of the current data set,
/// or `0` when the set is empty.
#[must_use]
pub fn resolve_effective_max(data: &[f64], auto_max: bool, max: f64) -> f64 {
    if !auto_max {
        return max;
    }
    data.iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |value| value.0)
}

/// Width of one bar so that `count` bars and their gaps fill `area_width`.
///
/// Returns `None` when there is nothing to lay out. The width never goes
/// negative, even when spacing alone exceeds the available area.
#[must_use]
pub fn bar_width(area_width: f64, spacing: f64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let count = count as f64;
    let width = (area_width - spacing * (count - 1.0)) / count;
    Some(width.max(0.0))
}

/// Left edge of bar `index`, snapped down to a whole pixel.
#[must_use]
pub fn bar_offset_x(index: usize, bar_width: f64, spacing: f64) -> f64 {
    (index as f64 * (bar_width + spacing)).floor()
}

/// Height of a bar for `value` inside an area of `area_height` pixels.
///
/// Non-positive ceilings produce zero-height bars. Heights are clamped into
/// `[0, area_height]` and truncated to whole pixels when `round_to_pixel`.
#[must_use]
pub fn bar_height(value: f64, effective_max: f64, area_height: f64, round_to_pixel: bool) -> f64 {
    if effective_max <= 0.0 || area_height <= 0.0 {
        return 0.0;
    }
    // Ratio first so the ceiling value maps to exactly `area_height`.
    let height = (area_height * (value / effective_max)).clamp(0.0, area_height);
    if round_to_pixel { height.trunc() } else { height }
}

/// Picks the fill for bar `index`: the palette cycled by index, or `fallback`.
#[must_use]
pub fn resolve_bar_color<T: Copy>(index: usize, palette: &[T], fallback: T) -> T {
    if palette.is_empty() {
        return fallback;
    }
    palette[index % palette.len()]
}

/// Reserved band under the bars where x-axis labels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBand {
    pub font_size_px: f64,
    pub top_margin_px: f64,
}

impl LabelBand {
    /// Sizes the label row from the bar width. Bars narrower than one pixel
    /// cannot carry a label, so no band is reserved for them.
    #[must_use]
    pub fn for_bar_width(bar_width: f64) -> Option<Self> {
        let font_size_px = bar_width.floor();
        if !font_size_px.is_finite() || font_size_px < 1.0 {
            return None;
        }
        Some(Self {
            font_size_px,
            top_margin_px: (font_size_px * LABEL_TOP_MARGIN_RATIO).ceil(),
        })
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.font_size_px + self.top_margin_px
    }
}

/// Per-draw constants shared by every bar of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub count: usize,
    pub bar_width: f64,
    /// Width used for drawn rectangles, rounded up to avoid sub-pixel gaps.
    pub drawn_width: f64,
    pub spacing: f64,
    /// Height available to bars once the label band is reserved.
    pub bar_max_height: f64,
    pub label_band: Option<LabelBand>,
    pub effective_max: f64,
}

impl BarLayout {
    /// Resolves the layout for `count` bars in a `width` x `height` area.
    #[must_use]
    pub fn resolve(
        width: f64,
        height: f64,
        count: usize,
        spacing: f64,
        with_labels: bool,
        effective_max: f64,
    ) -> Option<Self> {
        let bar_width = bar_width(width, spacing, count)?;
        let label_band = if with_labels {
            LabelBand::for_bar_width(bar_width)
        } else {
            None
        };
        let reserved = label_band.map_or(0.0, LabelBand::height);

        Some(Self {
            count,
            bar_width,
            drawn_width: bar_width.ceil(),
            spacing,
            bar_max_height: (height - reserved).max(0.0),
            label_band,
            effective_max,
        })
    }

    #[must_use]
    pub fn bar_left(&self, index: usize) -> f64 {
        bar_offset_x(index, self.bar_width, self.spacing)
    }

    #[must_use]
    pub fn bar_height(&self, value: f64, round_to_pixel: bool) -> f64 {
        bar_height(value, self.effective_max, self.bar_max_height, round_to_pixel)
    }

    /// Horizontal center of bar `index`, used to anchor its label.
    #[must_use]
    pub fn bar_center_x(&self, index: usize) -> f64 {
        index as f64 * (self.bar_width + self.spacing) + self.bar_width * 0.5
    }
}
