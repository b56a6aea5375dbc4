use proptest::prelude::*;
use scatter_rs::core::{
    DOMAIN_PADDING_RATIO, LinearScale, Margins, RawDataSet, StyleDefaults, Viewport, ViewTransform,
    bind_points, compute_scales, nearest_point,
};

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 2048.0))
            .expect("valid scale");

        let px = scale.to_pixel(value);
        let recovered = scale.to_data(px);

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9);
    }

    #[test]
    fn inverted_range_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (1024.0, 0.0))
            .expect("valid scale");

        let recovered = scale.to_data(scale.to_pixel(value));
        prop_assert!((recovered - value).abs() <= domain_span * 1e-9);
    }

    #[test]
    fn padded_domain_strictly_contains_the_data_extent(
        pairs in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 2..32)
    ) {
        let raw = RawDataSet::from_pairs(pairs.iter().copied());
        let points = bind_points(&raw, StyleDefaults::default(), 0).expect("bind");
        let (x_scale, y_scale) =
            compute_scales(&points, Viewport::new(2048, 1024), Margins::default())
                .expect("scales");

        let x_min = pairs.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x_max = pairs.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let y_min = pairs.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let y_max = pairs.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let (xd0, xd1) = x_scale.domain();
        let (yd0, yd1) = y_scale.domain();

        if x_max > x_min {
            prop_assert!(xd0 < x_min && xd1 > x_max);
            let pad = (x_max - x_min) * DOMAIN_PADDING_RATIO;
            prop_assert!((x_min - xd0 - pad).abs() <= 1e-9 * (1.0 + pad));
            prop_assert!((xd1 - x_max - pad).abs() <= 1e-9 * (1.0 + pad));
        } else {
            prop_assert_eq!((xd0, xd1), (x_min, x_max));
        }

        if y_max > y_min {
            prop_assert!(yd0 < y_min && yd1 > y_max);
        } else {
            prop_assert_eq!((yd0, yd1), (y_min, y_max));
        }
    }

    #[test]
    fn nearest_point_at_its_own_pixel_wins(
        xs in prop::collection::btree_set(-1_000i32..1_000, 2..24),
        pick_factor in 0.0f64..1.0
    ) {
        let pairs: Vec<(f64, f64)> = xs
            .iter()
            .map(|&x| (f64::from(x), f64::from(x % 7)))
            .collect();
        let raw = RawDataSet::from_pairs(pairs.iter().copied());
        let points = bind_points(&raw, StyleDefaults::default(), 0).expect("bind");
        let (x_scale, y_scale) =
            compute_scales(&points, Viewport::new(2048, 1024), Margins::default())
                .expect("scales");

        let transform = ViewTransform::default();
        let x_view = transform.x_view(x_scale);
        let y_view = transform.y_view(y_scale);

        let pick = ((pick_factor * (points.len() - 1) as f64).round()) as usize;
        let target = &points[pick];
        let pixel = (x_view.to_pixel(target.x), y_view.to_pixel(target.y));

        let hit = nearest_point(&points, pixel, x_view, y_view).expect("non-empty dataset");
        prop_assert_eq!(hit.index, target.index);
    }
}
