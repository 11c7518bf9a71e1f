use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// The frame bounds are cleared with `clear_color` first. The default is
/// fully transparent so the chart composes over whatever the host painted.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::TRANSPARENT,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        let drawn = self.draw_frame(context, frame);
        let restored = context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err));
        let stats = drawn?;
        restored?;

        trace!(
            rects = stats.rects_drawn,
            texts = stats.texts_drawn,
            "cairo frame drawn"
        );
        self.last_stats = stats;
        Ok(())
    }

    /// Draws inside a saved context state; the caller always restores it.
    fn draw_frame(&self, context: &Context, frame: &RenderFrame) -> ChartResult<CairoRenderStats> {
        let bounds = frame.bounds;
        context.rectangle(bounds.x, bounds.y, bounds.width, bounds.height);
        context.clip();
        context.set_operator(cairo::Operator::Source);
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear bounds", err))?;
        context.set_operator(cairo::Operator::Over);

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            fill_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, text);
            stats.texts_drawn += 1;
        }

        Ok(stats)
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)?;
        self.surface.flush();
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn fill_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Ok(());
    }
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string(&text.font_family);
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
