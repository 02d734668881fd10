use composite_chart::api::{ChartRenderer, ChartRendererConfig, ChartScales};
use composite_chart::core::{
    DataPoint, DataSet, Dimensions, LinearScale, Margin, TickThinning, thin_time_ticks,
};
use composite_chart::render::NullRenderer;
use proptest::prelude::*;

fn data_from(values: &[(f64, u8)]) -> DataSet {
    let mut cumulative = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, &(monthly, day))| {
            cumulative += monthly;
            let date = format!("{:02}-{:02}-{}", i % 12 + 1, day, 2020 + i / 12);
            DataPoint::new(&date, monthly, format!("{monthly:.1}"), cumulative).expect("point")
        })
        .collect()
}

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        max in 0.001f64..1_000_000.0,
        height in 1.0f64..4_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let scale = LinearScale::from_zero(max, height).expect("valid scale");
        let value = value_factor * max;
        let recovered = scale.invert(scale.map(value));
        prop_assert!((recovered - value).abs() <= 1e-6 * max.max(1.0));
    }

    #[test]
    fn retained_ticks_follow_stride(width in 0.0f64..4_000.0, count in 0usize..500) {
        let thinning = thin_time_ticks(width, count);
        let retained = thinning.retained_indices(count);
        for index in &retained {
            prop_assert_eq!(index % thinning.factor, 0);
        }
        if count > 0 {
            prop_assert_eq!(retained.first().copied(), Some(0));
            prop_assert!(retained.len() <= thinning.num_ticks.max(1));
        } else {
            prop_assert!(retained.is_empty());
        }
        prop_assert_eq!(thinning, TickThinning::compute(width, count, 50.0));
    }

    #[test]
    fn every_point_gets_a_bar_and_a_control_point(
        values in prop::collection::vec((0.0f64..500.0, 1u8..28), 1..48),
        width in 200u32..2_000,
        height in 120u32..1_200
    ) {
        let data = data_from(&values);
        let size = Dimensions::new(width, height);
        let mut chart = ChartRenderer::new(NullRenderer::default(), ChartRendererConfig::default())
            .expect("chart init");
        chart.render(&data, size).expect("render");

        let scene = chart.scene().expect("scene");
        let inner = Margin::default().inner_size(size).expect("inner");
        let scales = ChartScales::fit(&data, inner, 0.1).expect("scales");

        prop_assert_eq!(scene.bars.len(), data.len());
        prop_assert_eq!(scene.line.control_points.len(), data.len());
        for (bar, point) in scene.bars.iter().zip(data.points()) {
            let expected = inner.height - scales.left.map(point.monthly());
            prop_assert!((bar.to.height - expected).abs() <= 1e-9);
        }
        for pair in scene.line.control_points.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
    }
}
