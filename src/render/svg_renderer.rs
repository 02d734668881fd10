use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{AxisGroup, AxisOrient, ChartScene, Renderer, TooltipElement};

const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;

/// Renders scenes into SVG markup plus a single tooltip `<div>`.
///
/// Every `render` replaces the previous SVG document; the tooltip markup is
/// regenerated from the one tooltip element, so the page never holds more
/// than one.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    svg: String,
    tooltip: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn svg(&self) -> &str {
        &self.svg
    }

    #[must_use]
    pub fn tooltip_html(&self) -> &str {
        &self.tooltip
    }

    /// Host markup: the chart followed by the floating tooltip.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{}{}", self.svg, self.tooltip)
    }

    fn write_scene(scene: &ChartScene) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        write!(
            out,
            r#"<svg width="{}" height="{}"><g transform="translate({},{})">"#,
            scene.dimensions.width, scene.dimensions.height, scene.margin.left, scene.margin.top
        )?;

        if let Some(axis) = &scene.x_axis {
            write_axis(&mut out, "x axis", axis)?;
        }
        write_axis(&mut out, "y axis", &scene.right_axis)?;
        write_axis(&mut out, "y axis", &scene.left_axis)?;

        out.push_str(r#"<g class="bars">"#);
        for bar in &scene.bars {
            write!(
                out,
                r#"<rect class="chart-bar" data-index="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
                bar.index, bar.to.x, bar.to.y, bar.to.width, bar.to.height
            )?;
        }
        out.push_str("</g>");

        write!(
            out,
            r#"<path class="line" d="{}"/>"#,
            scene.line.to_svg_data()
        )?;
        out.push_str("</g></svg>");
        Ok(out)
    }

    fn write_tooltip(tooltip: &TooltipElement) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        write!(
            out,
            r#"<div class="toolTip" style="display:{};left:{}px;top:{}px">"#,
            tooltip.display(),
            tooltip.left,
            tooltip.top
        )?;
        write!(
            out,
            r#"<div class="toolTipLabel">{}</div><div class="toolTipValue">{}</div></div>"#,
            escape(&tooltip.label),
            escape(&tooltip.value)
        )?;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &ChartScene) -> ChartResult<()> {
        scene.validate()?;
        self.svg = Self::write_scene(scene).map_err(map_fmt_error)?;
        self.tooltip = Self::write_tooltip(&scene.tooltip).map_err(map_fmt_error)?;
        Ok(())
    }

    fn update_tooltip(&mut self, tooltip: &TooltipElement) -> ChartResult<()> {
        tooltip.validate()?;
        self.tooltip = Self::write_tooltip(tooltip).map_err(map_fmt_error)?;
        Ok(())
    }
}

fn write_axis(out: &mut String, class: &str, axis: &AxisGroup) -> std::fmt::Result {
    write!(
        out,
        r#"<g class="{class}" transform="translate({},{})">"#,
        axis.translate_x, axis.translate_y
    )?;
    for tick in &axis.ticks {
        let label = escape(&tick.label);
        match axis.orient {
            AxisOrient::Bottom => write!(
                out,
                r#"<g class="tick" transform="translate({},0)"><line y2="{TICK_SIZE_PX}"/><text y="{}" text-anchor="middle">{label}</text></g>"#,
                tick.position,
                TICK_SIZE_PX + TICK_PADDING_PX
            )?,
            AxisOrient::Left => write!(
                out,
                r#"<g class="tick" transform="translate(0,{})"><line x2="-{TICK_SIZE_PX}"/><text x="-{}" text-anchor="end">{label}</text></g>"#,
                tick.position,
                TICK_SIZE_PX + TICK_PADDING_PX
            )?,
            AxisOrient::Right => write!(
                out,
                r#"<g class="tick" transform="translate(0,{})"><line x2="{TICK_SIZE_PX}"/><text x="{}" text-anchor="start">{label}</text></g>"#,
                tick.position,
                TICK_SIZE_PX + TICK_PADDING_PX
            )?,
        }
    }
    if let Some(title) = &axis.title {
        write!(
            out,
            r#"<text x="{}" y="{}" dy=".71em" text-anchor="{}">{}</text>"#,
            title.x,
            title.y,
            title.h_align.svg_anchor(),
            escape(&title.text)
        )?;
    }
    out.push_str("</g>");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn map_fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg markup: {err}"))
}
