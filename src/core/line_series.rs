use serde::{Deserialize, Serialize};

use crate::core::{DataSet, LinearScale, TimeScale};

/// Pixel-space point the smoothed line is fitted through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

/// One drawing command of a path, in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

/// Uniform cubic B-spline through a sequence of control points.
///
/// The curve starts at the first control point and ends at the last one;
/// interior points pull the curve without being interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisPath {
    pub control_points: Vec<ControlPoint>,
    pub commands: Vec<PathCommand>,
}

impl BasisPath {
    #[must_use]
    pub fn through(control_points: Vec<ControlPoint>) -> Self {
        let commands = basis_commands(&control_points);
        Self {
            control_points,
            commands,
        }
    }

    /// SVG path data (`d` attribute) for the commands.
    #[must_use]
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { x, y } => out.push_str(&format!("M{x},{y}")),
                PathCommand::LineTo { x, y } => out.push_str(&format!("L{x},{y}")),
                PathCommand::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => out.push_str(&format!("C{c1x},{c1y},{c2x},{c2y},{x},{y}")),
            }
        }
        out
    }
}

/// Maps every point, in data order, to `(time(date), value(cumulative))`.
#[must_use]
pub fn project_cumulative_points(
    data: &DataSet,
    time_scale: TimeScale,
    value_scale: LinearScale,
) -> Vec<ControlPoint> {
    data.points()
        .iter()
        .map(|point| ControlPoint {
            x: time_scale.map(point.date()),
            y: value_scale.map(point.cumulative()),
        })
        .collect()
}

/// Projects the cumulative series into one smoothed path.
#[must_use]
pub fn project_cumulative_line(
    data: &DataSet,
    time_scale: TimeScale,
    value_scale: LinearScale,
) -> BasisPath {
    BasisPath::through(project_cumulative_points(data, time_scale, value_scale))
}

fn basis_commands(points: &[ControlPoint]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len() + 1);
    let Some(first) = points.first() else {
        return commands;
    };
    commands.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });

    match points.len() {
        1 => {}
        2 => {
            let last = points[1];
            commands.push(PathCommand::LineTo {
                x: last.x,
                y: last.y,
            });
        }
        _ => {
            let (p0, p1) = (points[0], points[1]);
            commands.push(PathCommand::LineTo {
                x: (5.0 * p0.x + p1.x) / 6.0,
                y: (5.0 * p0.y + p1.y) / 6.0,
            });
            for window in points.windows(3) {
                commands.push(basis_segment(window[0], window[1], window[2]));
            }
            let (prev, last) = (points[points.len() - 2], points[points.len() - 1]);
            commands.push(basis_segment(prev, last, last));
            commands.push(PathCommand::LineTo {
                x: last.x,
                y: last.y,
            });
        }
    }
    commands
}

fn basis_segment(p0: ControlPoint, p1: ControlPoint, next: ControlPoint) -> PathCommand {
    PathCommand::CubicTo {
        c1x: (2.0 * p0.x + p1.x) / 3.0,
        c1y: (2.0 * p0.y + p1.y) / 3.0,
        c2x: (p0.x + 2.0 * p1.x) / 3.0,
        c2y: (p0.y + 2.0 * p1.y) / 3.0,
        x: (p0.x + 4.0 * p1.x + next.x) / 6.0,
        y: (p0.y + 4.0 * p1.y + next.y) / 6.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(x: f64, y: f64) -> ControlPoint {
        ControlPoint { x, y }
    }

    #[test]
    fn single_point_is_a_bare_move() {
        let path = BasisPath::through(vec![cp(3.0, 4.0)]);
        assert_eq!(path.commands, vec![PathCommand::MoveTo { x: 3.0, y: 4.0 }]);
    }

    #[test]
    fn two_points_draw_a_straight_segment() {
        let path = BasisPath::through(vec![cp(0.0, 0.0), cp(6.0, 6.0)]);
        assert_eq!(path.to_svg_data(), "M0,0L6,6");
    }

    #[test]
    fn spline_ends_on_last_control_point() {
        let path = BasisPath::through(vec![cp(0.0, 0.0), cp(6.0, 12.0), cp(12.0, 0.0)]);
        // move, lead-in line, one interior segment, closing segment, final line
        assert_eq!(path.commands.len(), 5);
        assert_eq!(
            path.commands.last(),
            Some(&PathCommand::LineTo { x: 12.0, y: 0.0 })
        );
        assert_eq!(path.commands[1], PathCommand::LineTo { x: 1.0, y: 2.0 });
    }
}
