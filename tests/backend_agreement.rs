use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shadowcast::geom::polygon::containment::distance_to_boundary;
use shadowcast::shadow::classifier::{HullClassifier, SlabClassifier};
use shadowcast::shadow::raster::{SampleGrid, classify_grid};
use shadowcast::{
    Backend, Classification, ParamKey, ParameterStore, Point, Polygon, SceneParameters,
    ShadowClassifier, ShadowConfig, solve,
};

/// Points closer than this to an edge may legitimately differ between backends.
const BOUNDARY_BAND: f64 = 1e-6;

fn random_params(rng: &mut StdRng) -> SceneParameters {
    let mut store = ParameterStore::new();
    for key in ParamKey::ALL {
        let range = key.range();
        let value = rng.gen_range(range.min..range.max);
        store.set(key, value).unwrap();
    }
    store.snapshot()
}

#[test]
fn test_hull_contains_inputs_and_is_convex() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = ShadowConfig::new();
    for _ in 0..100 {
        let params = random_params(&mut rng);
        let g = solve(&params, &config);
        let hull = g.shadow_polygon().unwrap();
        assert!(hull.len() >= 4 && hull.len() <= 8);
        assert!(hull.is_convex(1e-9));
        for pt in g.candidate_points() {
            assert!(hull.is_point_inside(pt, 1e-7), "{pt} outside {hull}");
        }
        assert!(hull.area() >= params.footprint_area() - 1e-6);
    }
}

#[test]
fn test_backends_agree_on_random_scenes() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = ShadowConfig::new();
    let mut checked = 0;
    let mut shadowed = 0;

    for _ in 0..20 {
        let params = random_params(&mut rng);
        let g = solve(&params, &config);
        let hull_classifier = HullClassifier::new(&g, &config);
        let slab_classifier = SlabClassifier::new(&g, &config);
        let hull = Polygon::new(hull_classifier.hull().to_vec()).unwrap();

        // Sample around the shadow so that all three classes show up
        let (pmin, pmax) = hull.bbox();
        for _ in 0..200 {
            let pt = Point::new(
                rng.gen_range(pmin.x - 10.0..pmax.x + 10.),
                rng.gen_range(pmin.y - 10.0..pmax.y + 10.),
            );
            if distance_to_boundary(pt, &hull.pts) < BOUNDARY_BAND
                || distance_to_boundary(pt, &g.footprint) < BOUNDARY_BAND
            {
                continue;
            }
            let a = hull_classifier.classify(pt);
            let b = slab_classifier.classify(pt);
            assert_eq!(a, b, "{pt} with {params:?}");
            checked += 1;
            if a == Classification::Shadow {
                shadowed += 1;
            }
        }
    }
    assert!(checked > 3900);
    assert!(shadowed > 0);
}

#[test]
fn test_backends_agree_on_raster() {
    let config = ShadowConfig::new();
    let params = SceneParameters::default();
    let g = solve(&params, &config);
    let grid = SampleGrid::covering_ground(params.ground_size, 140, 140).unwrap();

    let hull_map = classify_grid(Backend::Hull.classifier(&g, &config).as_ref(), &grid);
    let slab_map = classify_grid(Backend::Slab.classifier(&g, &config).as_ref(), &grid);

    let mut mismatches = 0;
    for row in 0..grid.rows {
        for col in 0..grid.columns {
            if hull_map.get(col, row) != slab_map.get(col, row) {
                mismatches += 1;
            }
        }
    }
    // Only samples sitting on an edge may differ
    assert!(mismatches <= grid.len() / 200, "{mismatches} mismatches");

    let footprint = hull_map.area(Classification::Footprint);
    assert!((footprint - params.footprint_area()).abs() < 0.1 * params.footprint_area());
    assert!(hull_map.count(Classification::Shadow) > 0);
}
