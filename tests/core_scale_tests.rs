use scatter_rs::ScatterError;
use scatter_rs::core::{
    Margins, RawDataSet, StyleDefaults, Viewport, bind_points, compute_scales,
};

fn bound_points(pairs: &[(f64, f64)]) -> Vec<scatter_rs::core::ScatterPoint> {
    bind_points(
        &RawDataSet::from_pairs(pairs.iter().copied()),
        StyleDefaults::default(),
        0,
    )
    .expect("bind points")
}

#[test]
fn domains_are_padded_ten_percent_beyond_the_extent() {
    let points = bound_points(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
    let viewport = Viewport::new(800, 600);

    let (x_scale, y_scale) =
        compute_scales(&points, viewport, Margins::default()).expect("scales");

    let (x_start, x_end) = x_scale.domain();
    assert!((x_start - (-2.0)).abs() <= 1e-9);
    assert!((x_end - 22.0).abs() <= 1e-9);

    let (y_start, y_end) = y_scale.domain();
    assert!((y_start - (-1.0)).abs() <= 1e-9);
    assert!((y_end - 11.0).abs() <= 1e-9);
}

#[test]
fn ranges_span_the_plot_area_with_inverted_y() {
    let points = bound_points(&[(0.0, 0.0), (20.0, 10.0)]);
    let viewport = Viewport::new(800, 600);
    let margins = Margins::default();

    let (x_scale, y_scale) = compute_scales(&points, viewport, margins).expect("scales");

    assert_eq!(x_scale.range(), (0.0, margins.plot_width(viewport)));
    assert_eq!(y_scale.range(), (margins.plot_height(viewport), 0.0));

    // Increasing data value moves up on screen.
    let low = y_scale.to_pixel(-1.0);
    let high = y_scale.to_pixel(11.0);
    assert_eq!(low, margins.plot_height(viewport));
    assert_eq!(high, 0.0);
}

#[test]
fn scale_round_trip_within_tolerance() {
    let points = bound_points(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
    let (x_scale, _) =
        compute_scales(&points, Viewport::new(1000, 600), Margins::default()).expect("scales");

    let original = 7.25;
    let px = x_scale.to_pixel(original);
    let recovered = x_scale.to_data(px);
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn zero_width_extent_pads_by_zero_and_guards_division() {
    let points = bound_points(&[(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)]);
    let viewport = Viewport::new(640, 480);
    let margins = Margins::default();

    let (x_scale, _) = compute_scales(&points, viewport, margins).expect("scales");

    // No padding when the extent has zero width.
    assert_eq!(x_scale.domain(), (5.0, 5.0));

    // Every value parks at the range midpoint instead of dividing by zero.
    let mid = margins.plot_width(viewport) / 2.0;
    assert_eq!(x_scale.to_pixel(5.0), mid);
    assert_eq!(x_scale.to_pixel(123.0), mid);
    assert_eq!(x_scale.to_data(mid), 5.0);
}

#[test]
fn single_point_dataset_is_degenerate_on_both_axes() {
    let points = bound_points(&[(3.0, 4.0)]);
    let (x_scale, y_scale) =
        compute_scales(&points, Viewport::new(640, 480), Margins::default()).expect("scales");

    assert_eq!(x_scale.domain(), (3.0, 3.0));
    assert_eq!(y_scale.domain(), (4.0, 4.0));
}

#[test]
fn empty_dataset_is_rejected() {
    let result = compute_scales(&[], Viewport::new(640, 480), Margins::default());
    assert!(matches!(result, Err(ScatterError::InvalidData(_))));
}

#[test]
fn invalid_viewport_is_rejected() {
    let points = bound_points(&[(0.0, 0.0), (1.0, 1.0)]);
    let result = compute_scales(&points, Viewport::new(0, 0), Margins::default());
    assert!(matches!(result, Err(ScatterError::InvalidViewport { .. })));
}

#[test]
fn margins_widen_for_axis_titles() {
    let margins = Margins::default();
    assert_eq!(margins.bottom, 20.0);
    assert_eq!(margins.left, 45.0);

    let adjusted = margins.adjusted_for_titles(true, true);
    assert_eq!(adjusted.bottom, 57.0);
    assert_eq!(adjusted.left, 70.0);

    let x_only = margins.adjusted_for_titles(true, false);
    assert_eq!(x_only.bottom, 57.0);
    assert_eq!(x_only.left, 45.0);
}
