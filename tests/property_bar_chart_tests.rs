use bar_chart_rs::api::{AccessibilityContainer, BarChartConfig, BarChartView, build_bar_chart_scene};
use bar_chart_rs::core::{Point, Rect, bar_height, resolve_bar_color};
use bar_chart_rs::render::{Color, NullRenderer};
use proptest::prelude::*;

fn foreground_heights(config: &BarChartConfig, area: Rect) -> Vec<f64> {
    build_bar_chart_scene(config, area, Point::default())
        .expect("scene")
        .frame
        .rects
        .chunks_exact(2)
        .map(|pair| pair[1].height)
        .collect()
}

proptest! {
    #[test]
    fn accessibility_count_matches_bar_count(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 1..64),
        with_labels in any::<bool>(),
        width in 1.0f64..2_000.0,
        height in 1.0f64..1_000.0
    ) {
        let mut config = BarChartConfig::default().with_data(data.clone());
        if with_labels {
            config = config.with_x_labels(data.iter().map(|value| format!("{value:.0}")).collect());
        }
        let mut view = BarChartView::new(NullRenderer::default(), config, Rect::from_size(width, height))
            .expect("view init");
        view.render().expect("render");

        prop_assert_eq!(view.accessibility_element_count(), data.len());
        prop_assert_eq!(view.renderer().last_rect_count, data.len() * 2);
    }

    #[test]
    fn bar_height_is_monotonic_in_value(
        a in -500.0f64..500.0,
        b in -500.0f64..500.0,
        effective_max in 0.0f64..1_000.0,
        area_height in 0.0f64..1_000.0,
        round in any::<bool>()
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            bar_height(low, effective_max, area_height, round)
                <= bar_height(high, effective_max, area_height, round)
        );
    }

    #[test]
    fn auto_max_tallest_bar_fills_area(
        data in prop::collection::vec(0.001f64..10_000.0, 1..48),
        height in 1.0f64..800.0,
        round in any::<bool>()
    ) {
        let config = BarChartConfig::default()
            .with_data(data.clone())
            .with_round_to_pixel(round);
        let heights = foreground_heights(&config, Rect::from_size(640.0, height));
        let tallest = heights.iter().copied().fold(f64::MIN, f64::max);

        if round {
            prop_assert_eq!(tallest, height.trunc());
        } else {
            prop_assert_eq!(tallest, height);
        }
    }

    #[test]
    fn zero_effective_max_flattens_bars(
        data in prop::collection::vec(-1_000.0f64..1_000.0, 1..32)
    ) {
        let config = BarChartConfig::default().with_data(data).with_fixed_max(0.0);
        let heights = foreground_heights(&config, Rect::from_size(300.0, 200.0));
        prop_assert!(heights.iter().all(|height| *height == 0.0));
    }

    #[test]
    fn rounded_heights_are_integers(
        data in prop::collection::vec(0.0f64..1_000.0, 1..32),
        height in 1.0f64..700.0
    ) {
        let config = BarChartConfig::default().with_data(data).with_round_to_pixel(true);
        let heights = foreground_heights(&config, Rect::from_size(500.0, height));
        prop_assert!(heights.iter().all(|height| height.fract() == 0.0));
    }

    #[test]
    fn bar_fill_follows_palette_or_default(
        count in 1usize..40,
        palette_len in 0usize..6
    ) {
        let palette: Vec<Color> = (0..palette_len)
            .map(|index| Color::rgb(index as f64 / 10.0, 0.5, 0.5))
            .collect();
        let config = BarChartConfig::default()
            .with_data(vec![1.0; count])
            .with_bar_colors(palette.clone());
        let scene = build_bar_chart_scene(&config, Rect::from_size(800.0, 100.0), Point::default())
            .expect("scene");

        for (index, pair) in scene.frame.rects.chunks_exact(2).enumerate() {
            let expected = if palette.is_empty() {
                config.bar_color
            } else {
                palette[index % palette.len()]
            };
            prop_assert_eq!(pair[1].fill_color, expected);
            prop_assert_eq!(pair[1].fill_color, resolve_bar_color(index, &palette, config.bar_color));
        }
    }

    #[test]
    fn scene_build_is_deterministic_and_valid(
        data in prop::collection::vec(-5_000.0f64..5_000.0, 0..96),
        spacing in 0.0f64..40.0,
        width in 0.0f64..1_500.0,
        height in 0.0f64..900.0
    ) {
        let config = BarChartConfig::default().with_data(data).with_bar_spacing(spacing);
        let area = Rect::from_size(width, height);
        let first = build_bar_chart_scene(&config, area, Point::default()).expect("first");
        let second = build_bar_chart_scene(&config, area, Point::default()).expect("second");

        prop_assert_eq!(&first, &second);
        prop_assert!(first.frame.validate().is_ok());
    }
}
