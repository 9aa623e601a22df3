use shadowcast::geom::bboxes::bounding_box;
use shadowcast::shadow::readout::Readout;
use shadowcast::view::config::ViewConfig;
use shadowcast::view::plan::{Layer, build_plan};
use shadowcast::view::viewport::{Viewport, WorldToViewport};
use shadowcast::{
    Classification, ParamKey, ParameterStore, Point, SceneParameters, ShadowConfig, Vector,
    classify_sample, solve,
};

fn reference_params() -> SceneParameters {
    SceneParameters {
        width: 24.,
        depth: 14.,
        height: 22.,
        rotation: 0.,
        sun_altitude: 45.,
        sun_azimuth: 180.,
        offset_x: 0.,
        offset_y: 0.,
        ..SceneParameters::default()
    }
}

#[test]
fn test_southern_sun_casts_north() {
    let config = ShadowConfig::new();
    let g = solve(&reference_params(), &config);

    assert!((g.shadow_length - 22.).abs() < 1e-9);
    assert!(g.shadow_vector.is_close(&Vector::new(0., 22.)));

    let hull = g.shadow_polygon().unwrap();
    let (pmin, pmax) = hull.bbox();
    assert!(pmin.is_close_tol(&Point::new(-12., -7.), 1e-9));
    assert!(pmax.is_close_tol(&Point::new(12., 29.), 1e-9));
    assert!((hull.area() - 24. * 36.).abs() < 1e-6);

    assert_eq!(
        classify_sample(Point::new(0., 0.), &g, &config),
        Classification::Footprint
    );
    assert_eq!(
        classify_sample(Point::new(0., 20.), &g, &config),
        Classification::Shadow
    );
    assert_eq!(
        classify_sample(Point::new(0., -20.), &g, &config),
        Classification::Ground
    );
    assert_eq!(
        classify_sample(Point::new(0., 35.), &g, &config),
        Classification::Ground
    );
}

#[test]
fn test_eastern_sun_casts_west() {
    let config = ShadowConfig::new();
    let params = SceneParameters {
        sun_azimuth: 90.,
        ..reference_params()
    };
    let g = solve(&params, &config);
    assert!(g.shadow_vector.is_close(&Vector::new(-22., 0.)));
    let (pmin, pmax) = g.shadow_polygon().unwrap().bbox();
    assert!(pmin.is_close_tol(&Point::new(-34., -7.), 1e-9));
    assert!(pmax.is_close_tol(&Point::new(12., 7.), 1e-9));
    assert_eq!(
        classify_sample(Point::new(-25., 0.), &g, &config),
        Classification::Shadow
    );
    assert_eq!(
        classify_sample(Point::new(25., 0.), &g, &config),
        Classification::Ground
    );
}

#[test]
fn test_low_sun_is_capped() {
    let config = ShadowConfig::new();
    let params = SceneParameters {
        sun_altitude: 1.,
        ..reference_params()
    };
    let g = solve(&params, &config);
    // 22 / tan(1 deg) is far beyond 1.5 * 140
    assert!((g.shadow_length - 210.).abs() < 1e-9);
    assert!((g.shadow_vector.length() - 210.).abs() < 1e-9);
}

#[test]
fn test_near_zenith_sun() {
    let config = ShadowConfig::new();
    let mut store = ParameterStore::from_params(reference_params()).unwrap();
    // Out of range, stored at the upper bound
    assert_eq!(store.set(ParamKey::SunAltitude, 95.).unwrap(), 89.9);
    let g = solve(&store.snapshot(), &config);
    let expected = 22. / 89.9_f64.to_radians().tan();
    assert!((g.shadow_length - expected).abs() < 1e-12);
    assert!(g.shadow_length > 0. && g.shadow_length < 0.05);
    let hull = g.shadow_polygon().unwrap();
    assert!(hull.area() > 336.);
    assert!(hull.area() < 336. + 24. * 0.05);
}

#[test]
fn test_quarter_turn_swaps_extents() {
    let config = ShadowConfig::new();
    let params = SceneParameters {
        rotation: 90.,
        ..reference_params()
    };
    let g = solve(&params, &config);
    let (pmin, pmax) = bounding_box(&g.footprint);
    assert!(pmin.is_close_tol(&Point::new(-7., -12.), 1e-9));
    assert!(pmax.is_close_tol(&Point::new(7., 12.), 1e-9));
}

#[test]
fn test_full_turn_is_identity() {
    let config = ShadowConfig::new();
    let mut store = ParameterStore::from_params(reference_params()).unwrap();
    store.set(ParamKey::Rotation, 10.).unwrap();
    let a = solve(&store.snapshot(), &config);
    assert_eq!(store.set(ParamKey::Rotation, 370.).unwrap(), 10.);
    let b = solve(&store.snapshot(), &config);
    for (pa, pb) in a.footprint.iter().zip(b.footprint.iter()) {
        assert!(pa.is_close(pb));
    }
}

#[test]
fn test_footprint_area_is_invariant() {
    let config = ShadowConfig::new();
    let mut store = ParameterStore::new();
    let area = |store: &ParameterStore| {
        let params = store.snapshot();
        Readout::new(&params, &solve(&params, &config)).footprint_area
    };
    let base = area(&store);
    for (key, value) in [
        (ParamKey::Rotation, 45.),
        (ParamKey::SunAzimuth, 300.),
        (ParamKey::SunAltitude, 12.),
        (ParamKey::OffsetX, -60.),
        (ParamKey::Height, 150.),
    ] {
        store.set(key, value).unwrap();
        assert_eq!(area(&store), base);
    }
    store.set(ParamKey::Width, 30.).unwrap();
    assert_eq!(area(&store), 30. * 14.);
}

#[test]
fn test_plan_for_every_update() {
    let shadow_config = ShadowConfig::new();
    let view_config = ViewConfig::new();
    let viewport = Viewport::new(1000., 700.).unwrap();
    let mut store = ParameterStore::new();

    for azimuth in [0., 90., 180., 270.] {
        store.set(ParamKey::SunAzimuth, azimuth).unwrap();
        let params = store.snapshot();
        let mapping =
            WorldToViewport::fit_ground(&viewport, params.ground_size, view_config.frame_margin)
                .unwrap();
        let g = solve(&params, &shadow_config);
        let plan = build_plan(&params, &g, &mapping, &view_config);
        assert_eq!(plan.layer(Layer::Shadow).count(), 1);
        assert_eq!(plan.layer(Layer::Footprint).count(), 1);
        assert!(plan.layer(Layer::SunArrow).count() >= 1);
        assert_eq!(plan.readout.sun_azimuth, azimuth);
    }
}
