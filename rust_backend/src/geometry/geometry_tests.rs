#[cfg(test)]
mod tests {
    use crate::core::domain::GeoPoint;
    use crate::geometry::{
        angular_distance, centroid, great_circle_distance, parse_path, point_in_polygon, to_path,
        BoundingBox, Equirectangular, Projection,
    };
    use proptest::prelude::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    fn british_isles() -> Vec<GeoPoint> {
        vec![p(49.8, -8.7), p(49.8, 1.8), p(60.9, 1.8), p(60.9, -8.7)]
    }

    fn identity(g: GeoPoint) -> (f64, f64) {
        (g.longitude(), g.latitude())
    }

    /// Test containment in a simple quadrilateral
    #[test]
    fn test_point_in_quadrilateral() {
        let poly = british_isles();
        assert!(point_in_polygon(p(51.5, -0.1), &poly));
        assert!(point_in_polygon(p(55.95, -3.19), &poly));
        assert!(!point_in_polygon(p(48.85, 2.35), &poly));
        assert!(!point_in_polygon(p(0.0, 0.0), &poly));
    }

    /// Test a non-convex (L-shaped) boundary
    #[test]
    fn test_point_in_concave_polygon() {
        let l_shape = vec![
            p(0.0, 0.0),
            p(0.0, 10.0),
            p(5.0, 10.0),
            p(5.0, 5.0),
            p(10.0, 5.0),
            p(10.0, 0.0),
        ];
        assert!(point_in_polygon(p(2.0, 8.0), &l_shape));
        assert!(point_in_polygon(p(8.0, 2.0), &l_shape));
        // the notch
        assert!(!point_in_polygon(p(8.0, 8.0), &l_shape));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        assert!(!point_in_polygon(p(0.0, 0.0), &[]));
        assert!(!point_in_polygon(p(0.0, 0.0), &[p(0.0, 0.0), p(1.0, 1.0)]));
    }

    /// Test that the antimeridian normalisation is relative to the polygon
    #[test]
    fn test_seam_crossing_polygon() {
        let chukotka = vec![p(60.0, 165.0), p(60.0, -170.0), p(72.0, -170.0), p(72.0, 165.0)];
        let bbox = BoundingBox::of(&chukotka).unwrap();
        assert!(bbox.crosses_antimeridian());

        assert!(point_in_polygon(p(65.0, 178.0), &chukotka));
        assert!(point_in_polygon(p(65.0, -175.0), &chukotka));
        assert!(point_in_polygon(p(65.0, 180.0), &chukotka));
        assert!(!point_in_polygon(p(65.0, -160.0), &chukotka));
        assert!(!point_in_polygon(p(65.0, 100.0), &chukotka));
    }

    #[test]
    fn test_bounding_box() {
        assert!(BoundingBox::of(&[]).is_none());
        let bbox = BoundingBox::of(&british_isles()).unwrap();
        assert_eq!(bbox.min_lat, 49.8);
        assert_eq!(bbox.max_lng, 1.8);
        assert!(!bbox.crosses_antimeridian());
    }

    #[test]
    fn test_centroid_is_vertex_mean() {
        let c = centroid(&[p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)]).unwrap();
        assert!((c.latitude() - 5.0).abs() < 1e-12);
        assert!((c.longitude() - 5.0).abs() < 1e-12);
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn test_centroid_across_seam() {
        let c = centroid(&[p(-20.0, 170.0), p(-20.0, -170.0), p(-10.0, -170.0), p(-10.0, 170.0)])
            .unwrap();
        assert!((c.latitude() + 15.0).abs() < 1e-12);
        assert!((c.longitude().abs() - 180.0).abs() < 1e-9);
    }

    /// London to Paris is roughly 344 km
    #[test]
    fn test_haversine_london_paris() {
        let d = great_circle_distance(p(51.5074, -0.1278), p(48.8566, 2.3522));
        assert!((d.value() - 343.5).abs() < 5.0, "got {}", d.value());
    }

    #[test]
    fn test_angular_distance_extremes() {
        let a = p(12.0, 34.0);
        assert!(angular_distance(a, a).value().abs() < 1e-9);
        assert!((angular_distance(a, a.antipode()).value() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_to_path_format() {
        let path = to_path(&[p(0.0, 0.0), p(0.0, 1.5), p(2.0, 1.5)], &identity);
        assert_eq!(path, "M0,0 L1.5,0 L1.5,2 Z");
    }

    /// Test that fewer than 3 vertices degrade to an empty path
    #[test]
    fn test_to_path_degenerate_is_empty() {
        assert_eq!(to_path(&[], &identity), "");
        assert_eq!(to_path(&[p(1.0, 1.0), p(2.0, 2.0)], &identity), "");
    }

    #[test]
    fn test_to_path_non_finite_projection_is_empty() {
        let broken = |_g: GeoPoint| (f64::NAN, 0.0);
        assert_eq!(to_path(&british_isles(), &broken), "");
    }

    #[test]
    fn test_parse_path_rejects_malformed() {
        assert!(parse_path("L1,2 L3,4 Z").is_none());
        assert!(parse_path("M1;2 L3,4 Z").is_none());
        assert!(parse_path("M1,2 Z L3,4").is_none());
        let empty = parse_path("").unwrap();
        assert!(empty.points.is_empty());
        assert!(!empty.closed);
    }

    #[test]
    fn test_equirectangular_pan_zoom() {
        let view = Equirectangular::world(720.0, 360.0);
        assert_eq!(view.project(p(0.0, 0.0)), (360.0, 180.0));

        let zoomed = view.with_zoom(2.0).with_center(p(51.5, -0.1));
        let (x, y) = zoomed.project(p(51.5, -0.1));
        assert!((x - 360.0).abs() < 1e-9 && (y - 180.0).abs() < 1e-9);

        let back = zoomed.unproject(400.0, 100.0).unwrap();
        let (x2, y2) = zoomed.project(back);
        assert!((x2 - 400.0).abs() < 1e-9 && (y2 - 100.0).abs() < 1e-9);

        assert!(view.unproject(-10.0, 180.0).is_none());
    }

    fn polygon_strategy() -> impl Strategy<Value = Vec<GeoPoint>> {
        prop::collection::vec((-89.0f64..89.0, -179.0f64..179.0), 0..40).prop_map(|pts| {
            pts.into_iter()
                .map(|(lat, lng)| GeoPoint::new(lat, lng).unwrap())
                .collect()
        })
    }

    proptest! {
        /// Identity projection, then parse: same vertex count and a closed path.
        #[test]
        fn prop_path_round_trip_shape(poly in polygon_strategy()) {
            let path = to_path(&poly, &identity);
            let parsed = parse_path(&path).unwrap();
            if poly.len() < 3 {
                prop_assert!(path.is_empty());
            } else {
                prop_assert_eq!(parsed.points.len(), poly.len());
                prop_assert!(parsed.closed);
                for (v, (x, y)) in poly.iter().zip(parsed.points.iter()) {
                    prop_assert_eq!(v.longitude(), *x);
                    prop_assert_eq!(v.latitude(), *y);
                }
            }
        }

        #[test]
        fn prop_distance_is_symmetric(a in (-90.0f64..=90.0, -180.0f64..=180.0),
                                      b in (-90.0f64..=90.0, -180.0f64..=180.0)) {
            let a = GeoPoint::new(a.0, a.1).unwrap();
            let b = GeoPoint::new(b.0, b.1).unwrap();
            let ab = great_circle_distance(a, b).value();
            let ba = great_circle_distance(b, a).value();
            prop_assert!((ab - ba).abs() < 1e-6);
            prop_assert!(ab >= 0.0 && ab <= 20_016.0);
        }
    }
}
