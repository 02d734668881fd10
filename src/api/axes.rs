use crate::core::{BandScale, InnerSize, LinearScale, TickThinning};
use crate::render::{AxisGroup, AxisOrient, AxisTick, AxisTitle, TextHAlign};

const AXIS_TITLE_Y: f64 = -12.0;
const LEFT_AXIS_TITLE_X: f64 = 71.0;

/// Bottom month axis, or `None` when thinning leaves nothing to draw.
pub(super) fn month_axis(
    band: &BandScale,
    thinning: TickThinning,
    inner: InnerSize,
) -> Option<AxisGroup> {
    if thinning.factor == 0 {
        return None;
    }

    let half_band = band.bandwidth() * 0.5;
    let ticks = thinning
        .retained_indices(band.len())
        .into_iter()
        .filter_map(|index| {
            band.domain().get_index(index).map(|label| AxisTick {
                label: label.clone(),
                position: band.position_at(index) + half_band,
            })
        })
        .collect();

    Some(AxisGroup {
        orient: AxisOrient::Bottom,
        translate_x: 0.0,
        translate_y: inner.height,
        ticks,
        title: None,
    })
}

pub(super) fn value_axis(
    scale: LinearScale,
    orient: AxisOrient,
    inner: InnerSize,
    tick_count: usize,
    title: Option<&str>,
) -> AxisGroup {
    let ticks = scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| AxisTick {
            label: format_tick_value(value),
            position: scale.map(value),
        })
        .collect();

    let (translate_x, title_x) = match orient {
        AxisOrient::Right => (inner.width, 0.0),
        _ => (0.0, LEFT_AXIS_TITLE_X),
    };

    AxisGroup {
        orient,
        translate_x,
        translate_y: 0.0,
        ticks,
        title: title.map(|text| AxisTitle {
            text: text.to_owned(),
            x: title_x,
            y: AXIS_TITLE_Y,
            h_align: TextHAlign::Right,
        }),
    }
}

/// Integer ticks print without a fraction, others keep up to three decimals.
fn format_tick_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let text = format!("{value:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
