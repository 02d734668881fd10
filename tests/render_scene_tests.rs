use std::time::Duration;

use approx::assert_relative_eq;
use composite_chart::api::{ChartRenderer, ChartRendererConfig, ChartScales, RenderOutcome};
use composite_chart::core::{DataPoint, DataSet, Dimensions, Margin};
use composite_chart::render::{JoinPhase, NullRenderer, SvgRenderer};

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

fn chart() -> ChartRenderer<NullRenderer> {
    ChartRenderer::new(NullRenderer::default(), ChartRendererConfig::default())
        .expect("chart init")
}

#[test]
fn bar_count_and_heights_follow_left_scale() {
    let data = monthly_data(12);
    let size = Dimensions::new(800, 400);
    let mut chart = chart();
    chart.render(&data, size).expect("render");

    let scene = chart.scene().expect("scene");
    let inner = Margin::default().inner_size(size).expect("inner");
    let scales = ChartScales::fit(&data, inner, 0.1).expect("scales");

    assert_eq!(scene.bars.len(), data.len());
    for (bar, point) in scene.bars.iter().zip(data.points()) {
        assert_relative_eq!(
            bar.to.height,
            inner.height - scales.left.map(point.monthly()),
            epsilon = 1e-9
        );
        assert_relative_eq!(bar.to.y, scales.left.map(point.monthly()), epsilon = 1e-9);
        assert_relative_eq!(bar.to.width, scales.band.bandwidth(), epsilon = 1e-9);
    }
}

#[test]
fn tallest_bar_reaches_plot_top() {
    let data = monthly_data(7);
    let mut chart = chart();
    chart.render(&data, Dimensions::new(600, 400)).expect("render");

    let scene = chart.scene().expect("scene");
    let tallest = scene
        .bars
        .iter()
        .max_by(|a, b| a.to.height.total_cmp(&b.to.height))
        .expect("bars");
    assert_relative_eq!(tallest.to.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(tallest.to.height, scene.inner.height, epsilon = 1e-9);
}

#[test]
fn first_render_enters_bars_with_staggered_delay() {
    let mut chart = chart();
    chart
        .render(&monthly_data(5), Dimensions::new(600, 400))
        .expect("render");

    let scene = chart.scene().expect("scene");
    for bar in &scene.bars {
        assert_eq!(bar.phase, JoinPhase::Enter);
        assert_eq!(bar.delay, Duration::from_millis(10 * bar.index as u64));
        assert_eq!(bar.from.height, 0.0);
        assert_relative_eq!(bar.from.y, scene.inner.height, epsilon = 1e-9);
        assert_eq!(bar.from.x, bar.to.x);
    }
}

#[test]
fn update_animates_from_previous_geometry() {
    let mut chart = chart();
    let size = Dimensions::new(600, 400);
    chart.render(&monthly_data(4), size).expect("first render");
    let before = chart.scene().expect("scene").bars.clone();

    chart.render(&monthly_data(6), size).expect("second render");
    let scene = chart.scene().expect("scene");
    assert_eq!(scene.bars.len(), 6);

    for bar in &scene.bars[..4] {
        assert_eq!(bar.phase, JoinPhase::Update);
        assert_eq!(bar.delay, Duration::ZERO);
        assert_eq!(bar.from, before[bar.index].to);
    }
    for bar in &scene.bars[4..] {
        assert_eq!(bar.phase, JoinPhase::Enter);
        assert_eq!(bar.from.height, 0.0);
    }
}

#[test]
fn removed_points_drop_their_bars() {
    let mut chart = chart();
    let size = Dimensions::new(600, 400);
    chart.render(&monthly_data(6), size).expect("first render");
    let outcome = chart.render(&monthly_data(2), size).expect("second render");

    match outcome {
        composite_chart::RenderOutcome::Drawn { bars, summary } => {
            assert_eq!(bars, 2);
            assert_eq!(summary.exited, 4);
            assert_eq!(summary.updated, 2);
            assert_eq!(summary.entered, 0);
        }
        other => panic!("expected a draw, got {other:?}"),
    }
    assert_eq!(chart.renderer().last_bar_count, 2);
}

#[test]
fn emptying_the_data_set_resets_the_join() {
    let mut chart = chart();
    let size = Dimensions::new(600, 400);
    chart.render(&monthly_data(3), size).expect("first render");
    chart.render(&DataSet::default(), size).expect("empty render");
    chart.render(&monthly_data(3), size).expect("third render");

    let scene = chart.scene().expect("scene");
    assert!(scene.bars.iter().all(|bar| bar.phase == JoinPhase::Enter));
}

#[test]
fn rerender_with_identical_data_is_idempotent() {
    let data = monthly_data(9);
    let size = Dimensions::new(640, 360);
    let mut chart = ChartRenderer::new(SvgRenderer::new(), ChartRendererConfig::default())
        .expect("chart init");

    chart.render(&data, size).expect("first render");
    let first_scene = chart.scene().expect("scene").clone();
    let first_svg = chart.renderer().svg().to_owned();

    chart.render(&data, size).expect("second render");
    let second_scene = chart.scene().expect("scene");

    assert_eq!(chart.renderer().svg(), first_svg);
    assert_eq!(second_scene.line, first_scene.line);
    assert_eq!(second_scene.x_axis, first_scene.x_axis);
    for (a, b) in first_scene.bars.iter().zip(&second_scene.bars) {
        assert_eq!(a.to, b.to);
    }
    assert_eq!(chart.renderer().document().matches(r#"class="toolTip""#).count(), 1);
}

#[test]
fn tooltip_is_positioned_from_bar_and_margin() {
    let mut chart = chart();
    chart.set_surface_offset_top(120.0).expect("offset");
    chart
        .render(&monthly_data(3), Dimensions::new(600, 400))
        .expect("render");
    chart.pointer_enter_bar(1).expect("enter");
    chart.pointer_move_bar(1).expect("move");

    let bar = chart.scene().expect("scene").bar(1).expect("bar").clone();
    let tooltip = chart.tooltip();
    assert!(tooltip.visible);
    assert_relative_eq!(
        tooltip.left,
        bar.to.x + 50.0 + bar.to.width / 2.0 - 40.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(tooltip.top, 120.0 + 4.0 + bar.to.y, epsilon = 1e-9);
    assert_eq!(tooltip.label, "Feb '22");
    assert_eq!(tooltip.value, "20 mi");
}

#[test]
fn render_hides_a_visible_tooltip() {
    let mut chart = ChartRenderer::new(SvgRenderer::new(), ChartRendererConfig::default())
        .expect("chart init");
    let size = Dimensions::new(600, 400);
    chart.render(&monthly_data(3), size).expect("render");
    chart.pointer_enter_bar(0).expect("enter");
    assert!(chart.renderer().tooltip_html().contains("display:inline-block"));

    chart.render(&monthly_data(3), size).expect("rerender");
    assert!(!chart.tooltip().visible);
    let document = chart.renderer().document();
    assert_eq!(document.matches(r#"class="toolTip""#).count(), 1);
    assert!(document.contains("display:none"));
}

#[test]
fn points_in_one_month_share_a_band() {
    let data = DataSet::new(vec![
        DataPoint::new("01-05-2024", 5.0, "5 mi", 5.0).expect("point"),
        DataPoint::new("01-20-2024", 8.0, "8 mi", 13.0).expect("point"),
        DataPoint::new("02-10-2024", 4.0, "4 mi", 17.0).expect("point"),
    ]);
    let mut chart = chart();
    chart.render(&data, Dimensions::new(600, 400)).expect("render");

    let scene = chart.scene().expect("scene");
    assert_eq!(scene.bars.len(), 3);
    assert_eq!(scene.bars[0].to.x, scene.bars[1].to.x);
    assert!(scene.bars[2].to.x > scene.bars[1].to.x);
    assert_eq!(scene.line.control_points.len(), 3);
}

#[test]
fn rejected_scene_leaves_the_join_untouched() {
    let size = Dimensions::new(600, 400);
    let invalid = DataSet::new(vec![
        DataPoint::new("01-15-2024", 10.0, "10 mi", 10.0).expect("point"),
        DataPoint::new("02-15-2024", -5.0, "-5 mi", 5.0).expect("point"),
    ]);
    let mut chart = chart();
    assert!(chart.render(&invalid, size).is_err());
    assert!(chart.scene().is_none());
    assert_eq!(chart.renderer().render_count, 0);

    let outcome = chart.render(&monthly_data(2), size).expect("render");
    match outcome {
        RenderOutcome::Drawn { bars, summary } => {
            assert_eq!(bars, 2);
            assert_eq!(summary.entered, 2);
            assert_eq!(summary.updated, 0);
        }
        other => panic!("expected a draw, got {other:?}"),
    }
    let scene = chart.scene().expect("scene");
    assert!(scene.bars.iter().all(|bar| bar.phase == JoinPhase::Enter));
}

#[test]
fn rejected_scene_keeps_previously_drawn_bars_bound() {
    let size = Dimensions::new(600, 400);
    let mut chart = chart();
    chart.render(&monthly_data(2), size).expect("first render");

    let mut grown: Vec<DataPoint> = monthly_data(2).points().to_vec();
    grown.push(DataPoint::new("03-15-2022", -1.0, "-1 mi", 29.0).expect("point"));
    assert!(chart.render(&DataSet::new(grown), size).is_err());
    assert_eq!(chart.renderer().render_count, 1);

    chart.render(&monthly_data(3), size).expect("third render");
    let scene = chart.scene().expect("scene");
    let phases: Vec<JoinPhase> = scene.bars.iter().map(|bar| bar.phase).collect();
    assert_eq!(
        phases,
        vec![JoinPhase::Update, JoinPhase::Update, JoinPhase::Enter]
    );
}
