use scatter_rs::ScatterError;
use scatter_rs::api::{NullSink, ScatterEngine, ScatterEngineConfig};
use scatter_rs::core::{RawDataSet, Viewport};
use scatter_rs::render::NullRenderer;

fn build_engine(pairs: &[(f64, f64)]) -> ScatterEngine<NullRenderer, NullSink> {
    let config = ScatterEngineConfig::new(Viewport::new(800, 600));
    let raw = RawDataSet::from_pairs(pairs.iter().copied());
    ScatterEngine::new(NullRenderer::default(), NullSink, config, &raw).expect("engine init")
}

#[test]
fn pan_translates_every_projected_point_by_the_delta() {
    let mut engine = build_engine(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);

    let before = engine.pixel_position_of(0).expect("pixel of point 0");
    engine.on_pan(30.0, -10.0).expect("pan");
    let after = engine.pixel_position_of(0).expect("pixel of point 0");

    assert!((after.0 - (before.0 + 30.0)).abs() <= 1e-9);
    assert!((after.1 - (before.1 - 10.0)).abs() <= 1e-9);
}

#[test]
fn zoom_keeps_the_anchor_pixel_stationary() {
    let mut engine = build_engine(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);

    let anchor = engine.pixel_position_of(1).expect("pixel of point 1");
    engine
        .on_wheel_zoom(2.0, 2.0, anchor.0, anchor.1)
        .expect("zoom");

    let after = engine.pixel_position_of(1).expect("pixel of point 1");
    assert!((after.0 - anchor.0).abs() <= 1e-9);
    assert!((after.1 - anchor.1).abs() <= 1e-9);

    // Other points spread away from the anchor under zoom-in.
    let other = engine.pixel_position_of(0).expect("pixel of point 0");
    let base_other = {
        let fresh = build_engine(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
        fresh.pixel_position_of(0).expect("pixel of point 0")
    };
    assert!((other.0 - anchor.0).abs() > (base_other.0 - anchor.0).abs());
}

#[test]
fn x_and_y_zoom_factors_are_independent() {
    let mut engine = build_engine(&[(0.0, 0.0), (10.0, 10.0)]);

    engine.on_wheel_zoom(2.0, 1.0, 0.0, 0.0).expect("zoom");
    let (fx, fy) = engine.view_transform().scale_factors();
    assert_eq!(fx, 2.0);
    assert_eq!(fy, 1.0);
}

#[test]
fn double_click_does_not_reset_or_snap_the_view() {
    let mut engine = build_engine(&[(0.0, 0.0), (10.0, 10.0)]);

    engine.on_pan(25.0, 5.0).expect("pan");
    engine.on_wheel_zoom(1.5, 1.5, 100.0, 100.0).expect("zoom");
    let transform = engine.view_transform();
    let renders = engine.renderer().render_count;

    engine.on_double_click();

    assert_eq!(engine.view_transform(), transform);
    assert_eq!(engine.renderer().render_count, renders);
}

#[test]
fn invalid_zoom_factor_is_rejected() {
    let mut engine = build_engine(&[(0.0, 0.0), (10.0, 10.0)]);

    let err = engine
        .on_wheel_zoom(0.0, 1.0, 0.0, 0.0)
        .expect_err("zero factor must fail");
    assert!(matches!(err, ScatterError::InvalidData(_)));

    let err = engine
        .on_pan(f64::NAN, 0.0)
        .expect_err("non-finite pan must fail");
    assert!(matches!(err, ScatterError::InvalidData(_)));
}

#[test]
fn pixel_data_mapping_round_trips_under_a_composed_transform() {
    let mut engine = build_engine(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);

    engine.on_pan(35.0, -12.0).expect("pan");
    engine.on_wheel_zoom(1.5, 2.5, 240.0, 200.0).expect("zoom");

    let (px, py) = engine.map_data_to_pixel(7.25, 3.5);
    let (x, y) = engine.map_pixel_to_data(px, py);
    assert!((x - 7.25).abs() <= 1e-9);
    assert!((y - 3.5).abs() <= 1e-9);
}

#[test]
fn hit_testing_follows_the_current_transform() {
    let mut engine = build_engine(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);

    engine.on_pan(150.0, 80.0).expect("pan");
    engine.on_wheel_zoom(3.0, 3.0, 200.0, 150.0).expect("zoom");

    let (px, py) = engine.pixel_position_of(0).expect("pixel of point 0");
    engine.on_click(px, py).expect("click");

    assert_eq!(engine.highlighted_indices(), vec![0]);
}
