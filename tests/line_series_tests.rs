use approx::assert_relative_eq;
use composite_chart::core::{
    DataPoint, DataSet, LinearScale, PathCommand, TimeScale, project_cumulative_line,
};

fn data() -> DataSet {
    DataSet::new(vec![
        DataPoint::new("01-01-2024", 10.0, "10 mi", 10.0).expect("point"),
        DataPoint::new("01-11-2024", 20.0, "20 mi", 30.0).expect("point"),
        DataPoint::new("01-21-2024", 10.0, "10 mi", 40.0).expect("point"),
        DataPoint::new("01-31-2024", 40.0, "40 mi", 80.0).expect("point"),
    ])
}

#[test]
fn line_has_one_control_point_per_datum_in_order() {
    let data = data();
    let time = TimeScale::from_data(&data, 300.0).expect("time scale");
    let value = LinearScale::from_zero(80.0, 200.0).expect("value scale");

    let path = project_cumulative_line(&data, time, value);
    assert_eq!(path.control_points.len(), data.len());

    let xs: Vec<f64> = path.control_points.iter().map(|p| p.x).collect();
    assert_relative_eq!(xs[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(xs[1], 100.0, epsilon = 1e-9);
    assert_relative_eq!(xs[2], 200.0, epsilon = 1e-9);
    assert_relative_eq!(xs[3], 300.0, epsilon = 1e-9);

    let ys: Vec<f64> = path.control_points.iter().map(|p| p.y).collect();
    assert_relative_eq!(ys[0], 175.0, epsilon = 1e-9);
    assert_relative_eq!(ys[3], 0.0, epsilon = 1e-9);
}

#[test]
fn basis_path_starts_and_ends_on_outer_points() {
    let data = data();
    let time = TimeScale::from_data(&data, 300.0).expect("time scale");
    let value = LinearScale::from_zero(80.0, 200.0).expect("value scale");
    let path = project_cumulative_line(&data, time, value);

    let first = path.control_points[0];
    let last = path.control_points[3];
    assert_eq!(
        path.commands.first(),
        Some(&PathCommand::MoveTo {
            x: first.x,
            y: first.y
        })
    );
    assert_eq!(
        path.commands.last(),
        Some(&PathCommand::LineTo {
            x: last.x,
            y: last.y
        })
    );
    // move + lead-in + (n - 2) interior curves + closing curve + final line
    assert_eq!(path.commands.len(), 1 + 1 + 2 + 1 + 1);
}

#[test]
fn svg_path_data_uses_cubic_segments() {
    let data = data();
    let time = TimeScale::from_data(&data, 300.0).expect("time scale");
    let value = LinearScale::from_zero(80.0, 200.0).expect("value scale");
    let d = project_cumulative_line(&data, time, value).to_svg_data();

    assert!(d.starts_with("M0,175"));
    assert_eq!(d.matches('C').count(), 3);
    assert!(d.ends_with("L300,0"));
}

#[test]
fn empty_series_has_no_commands() {
    let time = TimeScale::new(
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        chrono::NaiveDate::from_ymd_opt(2024, 2, 1).expect("date"),
        100.0,
    )
    .expect("time scale");
    let value = LinearScale::from_zero(1.0, 100.0).expect("value scale");
    let path = project_cumulative_line(&DataSet::default(), time, value);
    assert!(path.control_points.is_empty());
    assert!(path.commands.is_empty());
    assert!(path.to_svg_data().is_empty());
}
