use tracing::debug;

use crate::core::resolve_effective_max;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::{validate_data, validate_max, warn_on_label_mismatch};
use super::{BarChartView, InvalidationTopic};

impl<R: Renderer> BarChartView<R> {
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.config.data
    }

    /// Replaces the plotted values. Every value must be finite.
    pub fn set_data(&mut self, data: Vec<f64>) -> ChartResult<()> {
        validate_data(&data)?;
        debug!(
            previous = self.config.data.len(),
            count = data.len(),
            "set bar data"
        );
        self.config.data = data;
        warn_on_label_mismatch(&self.config);
        self.invalidate(InvalidationTopic::Data);
        Ok(())
    }

    #[must_use]
    pub fn x_labels(&self) -> Option<&[String]> {
        self.config.x_labels.as_deref()
    }

    /// Replaces the label row; `None` removes it and gives the bars their full
    /// height back.
    pub fn set_x_labels(&mut self, labels: Option<Vec<String>>) {
        debug!(
            count = ?labels.as_ref().map(Vec::len),
            "set bar x-labels"
        );
        self.config.x_labels = labels;
        warn_on_label_mismatch(&self.config);
        self.invalidate(InvalidationTopic::Labels);
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.config.max
    }

    /// Sets the fixed ceiling. Only effective while auto-max is off.
    pub fn set_max(&mut self, max: f64) -> ChartResult<()> {
        self.config.max = validate_max(max)?;
        self.invalidate(InvalidationTopic::Scale);
        Ok(())
    }

    #[must_use]
    pub fn auto_max(&self) -> bool {
        self.config.auto_max
    }

    pub fn set_auto_max(&mut self, enabled: bool) {
        self.config.auto_max = enabled;
        self.invalidate(InvalidationTopic::Scale);
    }

    /// Ceiling the next render will scale bars against.
    #[must_use]
    pub fn effective_max(&self) -> f64 {
        resolve_effective_max(&self.config.data, self.config.auto_max, self.config.max)
    }
}
