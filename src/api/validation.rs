use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::BarChartConfig;

pub(super) fn validate_data(data: &[f64]) -> ChartResult<()> {
    if let Some(index) = data.iter().position(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "bar value at index {index} must be finite"
        )));
    }
    Ok(())
}

pub(super) fn validate_max(max: f64) -> ChartResult<f64> {
    if !max.is_finite() || max < 0.0 {
        return Err(ChartError::InvalidData(
            "fixed max must be finite and >= 0".to_owned(),
        ));
    }
    Ok(max)
}

pub(super) fn validate_bar_spacing(spacing: f64) -> ChartResult<f64> {
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(ChartError::InvalidData(
            "bar spacing must be finite and >= 0".to_owned(),
        ));
    }
    Ok(spacing)
}

pub(super) fn validate_palette(colors: &[Color]) -> ChartResult<()> {
    for color in colors {
        color.validate()?;
    }
    Ok(())
}

pub(super) fn validate_font_family(family: &str) -> ChartResult<()> {
    if family.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "label font family must not be empty".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_config(config: &BarChartConfig) -> ChartResult<()> {
    validate_data(&config.data)?;
    validate_max(config.max)?;
    validate_bar_spacing(config.bar_spacing)?;
    config.bar_color.validate()?;
    validate_palette(config.palette())?;
    config.track_color.validate()?;
    config.label_color.validate()?;
    validate_font_family(&config.label_font_family)?;
    warn_on_label_mismatch(config);
    Ok(())
}

/// Mismatched label counts are tolerated at draw time, but usually point at a
/// host bug, so they are surfaced in logs.
pub(super) fn warn_on_label_mismatch(config: &BarChartConfig) {
    if let Some(labels) = &config.x_labels {
        if labels.len() != config.data.len() {
            warn!(
                labels = labels.len(),
                bars = config.data.len(),
                "x-label count does not match bar count"
            );
        }
    }
}
