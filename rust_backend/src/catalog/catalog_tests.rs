#[cfg(test)]
mod tests {
    use crate::catalog::{parse_boundary_document, BoundaryCatalog};
    use crate::color::{ColorAssigner, Rgb};
    use crate::core::domain::{GeoPoint, RelatedRegionGroup, TimezoneRegion};
    use crate::core::error::EngineError;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    fn square(id: &str, lat: f64, lng: f64) -> TimezoneRegion {
        TimezoneRegion::new(
            id,
            id,
            vec![
                p(lat - 1.0, lng - 1.0),
                p(lat - 1.0, lng + 1.0),
                p(lat + 1.0, lng + 1.0),
                p(lat + 1.0, lng - 1.0),
            ],
            p(lat, lng),
            Rgb::new(0, 0, 0),
        )
        .unwrap()
    }

    /// Test that the embedded data loads and keeps insertion order
    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = BoundaryCatalog::embedded().unwrap();
        assert!(catalog.len() >= 20);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.ids().next(), Some("Europe/London"));
        assert_eq!(catalog.all().len(), catalog.len());
    }

    /// Test that repeated calls share one instance
    #[test]
    fn test_embedded_catalog_is_initialised_once() {
        let a = BoundaryCatalog::embedded().unwrap();
        let b = BoundaryCatalog::embedded().unwrap();
        assert!(std::sync::Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_lookup_unknown_region() {
        let catalog = BoundaryCatalog::embedded().unwrap();
        let err = catalog.lookup("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err, EngineError::UnknownRegion("Mars/Olympus_Mons".to_string()));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_london_record() {
        let catalog = BoundaryCatalog::embedded().unwrap();
        let london = catalog.lookup("Europe/London").unwrap();
        assert_eq!(london.boundary().len(), 4);
        assert_eq!(london.center(), p(51.5, -0.1));
        // no explicit color in the data: derived from the identifier
        assert_eq!(london.color(), ColorAssigner::default().color_for("Europe/London"));
    }

    /// Test alias lookups and related identifier sets
    #[test]
    fn test_related_ids_and_aliases() {
        let catalog = BoundaryCatalog::embedded().unwrap();

        let detroit = catalog.lookup("America/Detroit").unwrap();
        assert_eq!(detroit.id(), "America/New_York");

        let related = catalog.related_ids("America/Toronto").unwrap();
        assert!(related.contains("America/New_York"));
        assert!(related.contains("America/Detroit"));
        assert!(related.contains("America/Toronto"));
        assert_eq!(related, catalog.related_ids("America/New_York").unwrap());

        let solo = catalog.related_ids("Asia/Tokyo").unwrap();
        assert_eq!(solo.into_iter().collect::<Vec<_>>(), vec!["Asia/Tokyo"]);

        assert!(catalog.related_ids("Nowhere/Land").is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = BoundaryCatalog::from_regions(
            vec![square("A/One", 0.0, 0.0), square("A/One", 10.0, 10.0)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::CatalogLoad(_)));
    }

    #[test]
    fn test_group_with_unknown_canonical_rejected() {
        let err = BoundaryCatalog::from_regions(
            vec![square("A/One", 0.0, 0.0)],
            vec![RelatedRegionGroup {
                canonical: "A/Missing".to_string(),
                members: vec!["A/One".to_string()],
            }],
        )
        .unwrap_err();
        assert!(err.to_string().contains("A/Missing"));
    }

    #[test]
    fn test_identifier_in_two_groups_rejected() {
        let result = BoundaryCatalog::from_regions(
            vec![square("A/One", 0.0, 0.0), square("A/Two", 10.0, 10.0)],
            vec![
                RelatedRegionGroup {
                    canonical: "A/One".to_string(),
                    members: vec!["A/Alias".to_string()],
                },
                RelatedRegionGroup {
                    canonical: "A/Two".to_string(),
                    members: vec!["A/Alias".to_string()],
                },
            ],
        );
        assert!(result.is_err());
    }

    /// Test that two regions with polygons can be grouped without aliasing
    #[test]
    fn test_group_of_two_real_regions() {
        let catalog = BoundaryCatalog::from_regions(
            vec![square("A/One", 0.0, 0.0), square("A/Two", 10.0, 10.0)],
            vec![RelatedRegionGroup {
                canonical: "A/One".to_string(),
                members: vec!["A/Two".to_string()],
            }],
        )
        .unwrap();
        // both keep their own boundary
        assert_eq!(catalog.canonical_id("A/Two").unwrap(), "A/Two");
        assert_eq!(catalog.related_ids("A/Two").unwrap().len(), 2);
    }

    #[test]
    fn test_degenerate_record_rejected() {
        let json = r#"{"regions": [{"id": "X/Y", "name": "XY", "center": [0, 0],
                       "boundary": [[0, 0], [1, 1]]}]}"#;
        let err = BoundaryCatalog::from_json_str(json, &ColorAssigner::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::DegenerateBoundary {
                id: "X/Y".to_string(),
                vertices: 2
            }
        );
    }

    #[test]
    fn test_explicit_color_is_kept() {
        let json = r##"{"regions": [{"id": "X/Y", "name": "XY", "color": "#112233",
                        "center": [0.25, 0.75], "boundary": [[0, 0], [0, 1], [1, 1]]}]}"##;
        let catalog = BoundaryCatalog::from_json_str(json, &ColorAssigner::default()).unwrap();
        assert_eq!(catalog.lookup("X/Y").unwrap().color(), Rgb::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_parse_reports_missing_field() {
        let json = r#"{"regions": [{"id": "X/Y", "center": [0, 0], "boundary": []}]}"#;
        let err = parse_boundary_document(json).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("name"), "unexpected message: {}", msg);
    }

    #[test]
    fn test_related_defaults_to_empty() {
        let json = r#"{"regions": []}"#;
        let doc = parse_boundary_document(json).unwrap();
        assert!(doc.related.is_empty());
        let catalog = BoundaryCatalog::from_document(doc, &ColorAssigner::default()).unwrap();
        assert!(catalog.is_empty());
    }
}
