use composite_chart::api::{ChartRenderer, ChartRendererConfig, RenderOutcome, SkipReason};
use composite_chart::core::{DataPoint, DataSet, Dimensions};
use composite_chart::render::{NullRenderer, SvgRenderer};

fn monthly_data(count: usize) -> DataSet {
    let mut cumulative = 0.0;
    (0..count)
        .map(|i| {
            let monthly = ((i % 7) + 1) as f64 * 10.0;
            cumulative += monthly;
            let date = format!("{:02}-15-{}", i % 12 + 1, 2022 + i / 12);
            DataPoint::new(&date, monthly, format!("{monthly} mi"), cumulative)
                .expect("valid point")
        })
        .collect()
}

#[test]
fn renderer_smoke_flow() {
    let config = ChartRendererConfig::default();
    let mut chart = ChartRenderer::new(NullRenderer::default(), config).expect("chart init");

    let outcome = chart
        .render(&monthly_data(6), Dimensions::new(600, 400))
        .expect("render");
    assert!(outcome.is_drawn());
    assert_eq!(chart.renderer().render_count, 1);
    assert_eq!(chart.renderer().last_bar_count, 6);

    chart.pointer_enter_bar(2).expect("enter");
    chart.pointer_move_bar(2).expect("move");
    assert!(chart.tooltip().visible);
    assert_eq!(chart.tooltip().label, "Mar '22");
    assert_eq!(chart.tooltip().value, "30 mi");

    chart.pointer_leave_bar().expect("leave");
    assert!(!chart.tooltip().visible);
    assert_eq!(chart.renderer().tooltip_updates, 3);
}

#[test]
fn empty_data_set_is_a_no_op() {
    let mut chart = ChartRenderer::new(NullRenderer::default(), ChartRendererConfig::default())
        .expect("chart init");

    let outcome = chart
        .render(&DataSet::default(), Dimensions::new(600, 400))
        .expect("render");
    assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::EmptyData));
    assert_eq!(chart.renderer().render_count, 0);
    assert!(chart.scene().is_none());
}

#[test]
fn surface_smaller_than_margins_is_skipped() {
    let mut chart = ChartRenderer::new(NullRenderer::default(), ChartRendererConfig::default())
        .expect("chart init");

    let outcome = chart
        .render(&monthly_data(3), Dimensions::new(90, 60))
        .expect("render");
    assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::SurfaceTooSmall));
    assert_eq!(chart.renderer().render_count, 0);
}

#[test]
fn hovering_before_first_draw_is_an_error() {
    let mut chart = ChartRenderer::new(NullRenderer::default(), ChartRendererConfig::default())
        .expect("chart init");
    let err = chart.pointer_move_bar(0).expect_err("no scene yet");
    assert!(format!("{err}").contains("not been drawn"));
}

#[test]
fn hovering_unknown_bar_is_an_error() {
    let mut chart = ChartRenderer::new(NullRenderer::default(), ChartRendererConfig::default())
        .expect("chart init");
    chart
        .render(&monthly_data(2), Dimensions::new(600, 400))
        .expect("render");
    let err = chart.pointer_enter_bar(5).expect_err("index out of range");
    assert!(format!("{err}").contains("no bar at index 5"));
}

#[test]
fn svg_backend_produces_chart_groups() {
    let mut chart = ChartRenderer::new(SvgRenderer::new(), ChartRendererConfig::default())
        .expect("chart init");
    chart
        .render(&monthly_data(4), Dimensions::new(600, 400))
        .expect("render");

    let svg = chart.renderer().svg();
    assert!(svg.starts_with(r#"<svg width="600" height="400">"#));
    assert!(svg.contains(r#"<g transform="translate(50,40)">"#));
    assert!(svg.contains(r#"class="x axis""#));
    assert_eq!(svg.matches(r#"class="y axis""#).count(), 2);
    assert_eq!(svg.matches(r#"class="chart-bar""#).count(), 4);
    assert_eq!(svg.matches(r#"<path class="line""#).count(), 1);
    assert!(svg.contains("Miles per month"));
    assert!(svg.contains("Total miles"));
}
