use tracing::debug;

use crate::core::{Point, Rect};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{
    AccessibilityContainer, AccessibilityElement, BarChartConfig, BarChartScene,
    InvalidationTopic, InvalidationTopics, build_bar_chart_scene,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Stateful bar chart facade consumed by host UI layers.
///
/// Setters validate their input, update the state and record a pending
/// redraw. `render` turns the current state into a frame for the renderer and
/// replaces the published accessibility elements.
pub struct BarChartView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) bounds: Rect,
    pub(super) screen_origin: Point,
    pub(super) accessibility: Vec<AccessibilityElement>,
    pub(super) pending: InvalidationTopics,
}

impl<R: Renderer> BarChartView<R> {
    /// Creates a view drawing into `bounds`. The first render is already
    /// requested.
    pub fn new(renderer: R, config: BarChartConfig, bounds: Rect) -> ChartResult<Self> {
        validate_config(&config)?;
        let bounds = bounds.validate_bounds()?;
        Ok(Self {
            renderer,
            config,
            bounds,
            screen_origin: Point::default(),
            accessibility: Vec::new(),
            pending: InvalidationTopics::all(),
        })
    }

    /// Creates a view populated with the sample preview chart.
    pub fn preview(renderer: R, bounds: Rect) -> ChartResult<Self> {
        Self::new(renderer, BarChartConfig::preview(), bounds)
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    /// Replaces the whole configuration at once.
    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        validate_config(&config)?;
        self.config = config;
        self.pending = InvalidationTopics::all();
        Ok(())
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) -> ChartResult<()> {
        self.bounds = bounds.validate_bounds()?;
        self.invalidate(InvalidationTopic::Layout);
        Ok(())
    }

    #[must_use]
    pub fn screen_origin(&self) -> Point {
        self.screen_origin
    }

    /// Sets where the drawing surface sits on screen, used for accessibility
    /// frames.
    pub fn set_screen_origin(&mut self, origin: Point) -> ChartResult<()> {
        self.screen_origin = origin.validate()?;
        self.invalidate(InvalidationTopic::Layout);
        Ok(())
    }

    /// Builds the scene for the current state without rendering it.
    pub fn build_scene(&self) -> ChartResult<BarChartScene> {
        build_bar_chart_scene(&self.config, self.bounds, self.screen_origin)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let scene = self.build_scene()?;
        self.renderer.render(&scene.frame)?;
        self.finish_render(scene);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by host draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let scene = self.build_scene()?;
        self.renderer
            .render_on_cairo_context(context, &scene.frame)?;
        self.finish_render(scene);
        Ok(())
    }

    fn finish_render(&mut self, scene: BarChartScene) {
        debug!(
            bars = scene.accessibility.len(),
            rects = scene.frame.rects.len(),
            texts = scene.frame.texts.len(),
            "rendered bar chart"
        );
        self.accessibility = scene.accessibility;
        self.clear_pending_invalidation();
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> AccessibilityContainer for BarChartView<R> {
    /// Elements from the most recent render, in bar order.
    fn accessibility_elements(&self) -> &[AccessibilityElement] {
        &self.accessibility
    }
}
