use serde::{Deserialize, Serialize};

use crate::core::{
    BarLayout, Point, Rect, bar_accessibility_name, format_accessibility_label,
    resolve_bar_color, resolve_effective_max,
};
use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{AccessibilityContainer, AccessibilityElement, BarChartConfig};

/// Draw commands plus accessibility descriptors for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartScene {
    pub frame: RenderFrame,
    pub accessibility: Vec<AccessibilityElement>,
    /// `None` when there were no bars to lay out.
    pub layout: Option<BarLayout>,
}

impl BarChartScene {
    fn empty(area: Rect) -> Self {
        Self {
            frame: RenderFrame::new(area),
            accessibility: Vec::new(),
            layout: None,
        }
    }
}

impl AccessibilityContainer for BarChartScene {
    fn accessibility_elements(&self) -> &[AccessibilityElement] {
        &self.accessibility
    }
}

/// Builds the scene for `config` drawn into `area`.
///
/// Each bar contributes a full-height track rectangle followed by its
/// foreground rectangle, so `frame.rects` holds `2 * data.len()` entries in
/// bar order. Accessibility frames are the foreground rectangles translated by
/// `screen_origin`, the position of the drawing surface on screen.
pub fn build_bar_chart_scene(
    config: &BarChartConfig,
    area: Rect,
    screen_origin: Point,
) -> ChartResult<BarChartScene> {
    let area = area.validate_bounds()?;
    let screen_origin = screen_origin.validate()?;

    let count = config.data.len();
    let effective_max = resolve_effective_max(&config.data, config.auto_max, config.max);
    let labels = config.x_labels.as_deref();

    let Some(layout) = BarLayout::resolve(
        area.width,
        area.height,
        count,
        config.bar_spacing,
        labels.is_some(),
        effective_max,
    ) else {
        return Ok(BarChartScene::empty(area));
    };

    let mut frame = RenderFrame::new(area);
    frame.rects.reserve(count * 2);

    if let (Some(labels), Some(band)) = (labels, layout.label_band) {
        let label_y = area.y + layout.bar_max_height + band.top_margin_px;
        for (index, label) in labels.iter().take(count).enumerate() {
            if label.is_empty() {
                continue;
            }
            frame.texts.push(
                TextPrimitive::new(
                    label.as_str(),
                    area.x + layout.bar_center_x(index),
                    label_y,
                    band.font_size_px,
                    config.label_color,
                    TextHAlign::Center,
                )
                .with_font_family(config.label_font_family.as_str()),
            );
        }
    }

    let palette = config.palette();
    let mut accessibility = Vec::with_capacity(count);
    for (index, &value) in config.data.iter().enumerate() {
        let x = area.x + layout.bar_left(index);
        let height = layout.bar_height(value, config.round_to_pixel);

        frame.rects.push(RectPrimitive::new(
            x,
            area.y,
            layout.drawn_width,
            layout.bar_max_height,
            config.track_color,
        ));

        let bar = Rect::new(
            x,
            area.y + layout.bar_max_height - height,
            layout.drawn_width,
            height,
        );
        frame.rects.push(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            resolve_bar_color(index, palette, config.bar_color),
        ));

        let name = bar_accessibility_name(index, count, labels);
        accessibility.push(AccessibilityElement::new(
            bar.translated(screen_origin),
            format_accessibility_label(&name, value, effective_max),
        ));
    }

    Ok(BarChartScene {
        frame,
        accessibility,
        layout: Some(layout),
    })
}

#[cfg(test)]
mod tests {
    use super::build_bar_chart_scene;
    use crate::api::{AccessibilityContainer, BarChartConfig};
    use crate::core::{Point, Rect};
    use crate::render::Color;

    fn bar_heights(config: &BarChartConfig, area: Rect) -> Vec<f64> {
        let scene = build_bar_chart_scene(config, area, Point::default()).expect("scene");
        scene.frame.rects.iter().skip(1).step_by(2).map(|rect| rect.height).collect()
    }

    #[test]
    fn empty_data_draws_nothing() {
        let scene = build_bar_chart_scene(
            &BarChartConfig::default(),
            Rect::from_size(200.0, 100.0),
            Point::default(),
        )
        .expect("scene");
        assert!(scene.frame.is_empty());
        assert!(scene.accessibility.is_empty());
        assert!(scene.layout.is_none());
    }

    #[test]
    fn auto_max_fills_tallest_bar() {
        let config = BarChartConfig::default()
            .with_data(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0])
            .with_bar_spacing(0.0);
        let heights = bar_heights(&config, Rect::from_size(80.0, 100.0));
        assert_eq!(heights[5], 100.0);
        assert_eq!(heights[1], 11.0);
        assert_eq!(heights[3], 11.0);
    }

    #[test]
    fn track_precedes_bar_and_anchors_at_bottom() {
        let config = BarChartConfig::default()
            .with_data(vec![5.0, 10.0])
            .with_bar_spacing(10.0);
        let scene = build_bar_chart_scene(&config, Rect::new(20.0, 30.0, 110.0, 100.0), Point::default())
            .expect("scene");

        let track = scene.frame.rects[0];
        let bar = scene.frame.rects[1];
        assert_eq!(track.fill_color, Color::white(0.97));
        assert_eq!((track.x, track.y, track.width, track.height), (20.0, 30.0, 50.0, 100.0));
        assert_eq!((bar.x, bar.y, bar.width, bar.height), (20.0, 80.0, 50.0, 50.0));
        assert_eq!(scene.frame.rects[3].x, 80.0);
    }

    #[test]
    fn accessibility_frames_are_translated_to_screen() {
        let config = BarChartConfig::default().with_data(vec![1.0, 2.0]);
        let scene = build_bar_chart_scene(
            &config,
            Rect::from_size(108.0, 50.0),
            Point::new(100.0, 200.0),
        )
        .expect("scene");

        assert_eq!(scene.accessibility_element_count(), 2);
        let second = scene.accessibility_element(1).expect("second element");
        assert_eq!(second.frame, Rect::new(158.0, 200.0, 50.0, 50.0));
        assert_eq!(second.label, "Bar 2 of 2 : 100.00 %");
    }

    #[test]
    fn labels_reserve_band_and_extra_labels_are_ignored() {
        let config = BarChartConfig::default()
            .with_data(vec![1.0, 1.0])
            .with_bar_spacing(0.0)
            .with_x_labels(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
        let scene = build_bar_chart_scene(&config, Rect::from_size(40.0, 100.0), Point::default())
            .expect("scene");

        let layout = scene.layout.expect("layout");
        assert_eq!(layout.bar_max_height, 100.0 - 20.0 - 7.0);
        assert_eq!(scene.frame.texts.len(), 2);
        assert_eq!(scene.frame.texts[1].x, 30.0);
        assert_eq!(scene.frame.texts[1].y, 73.0 + 7.0);
        assert_eq!(scene.accessibility[0].label, "a : 100.00 %");
    }

    #[test]
    fn rejects_invalid_area() {
        let config = BarChartConfig::preview();
        assert!(
            build_bar_chart_scene(&config, Rect::from_size(-1.0, 10.0), Point::default()).is_err()
        );
        assert!(
            build_bar_chart_scene(
                &config,
                Rect::from_size(10.0, 10.0),
                Point::new(f64::NAN, 0.0)
            )
            .is_err()
        );
    }
}
