//! Display configuration integration tests
//!
//! Drives the public entry points against the headless engine.

use implore_display::{
    Axis, AxisError, BoundData, Color, ConfigurationError, DataType, Dimensionality,
    DisplayConfig, DisplayError, DisplaySurface, DisplayToolkit, DrawTarget, MappingToken,
    MemoryCellRegistry, MemoryEngine, MemorySurface, ProjectionMatrix, RoleMapping, ScalarRole,
    ScalarType, SurfaceKind,
};
use proptest::prelude::*;
use rstest::rstest;

fn toolkit() -> DisplayToolkit<MemoryEngine> {
    DisplayToolkit::default()
}

fn toolkit_with(config: DisplayConfig) -> DisplayToolkit<MemoryEngine> {
    DisplayToolkit::new(MemoryEngine::new(), config).unwrap()
}

fn tokens(items: Vec<MappingToken>) -> Vec<MappingToken> {
    items
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// === Role Table ===

#[rstest]
#[case("x", 0)]
#[case("y", 1)]
#[case("z", 2)]
#[case("lat", 3)]
#[case("rgba", 11)]
#[case("hue", 12)]
#[case("alpha", 20)]
#[case("contour", 24)]
#[case("flow1x", 25)]
#[case("zoffset", 33)]
#[case("pointsize", 38)]
#[case("cylzaxis", 41)]
#[case("flow2radial", 47)]
fn test_role_slot_indices(#[case] name: &str, #[case] slot: usize) {
    let role = ScalarRole::lookup(name).expect("role should exist");
    assert_eq!(role.slot_index(), slot);
    assert_eq!(role.name(), name);
}

#[rstest]
#[case("bogus")]
#[case("X")]
#[case("DisplayXAxis")]
#[case("flow3x")]
fn test_unknown_role_names(#[case] name: &str) {
    assert_eq!(ScalarRole::lookup(name), None);
}

// === Mapping Resolution ===

#[test]
fn test_make_mapping_reports_unresolved() {
    init_tracing();
    let temp = ScalarType::new("temp");
    let press = ScalarType::new("press");
    let humid = ScalarType::new("humid");

    let resolution = toolkit()
        .make_mapping(&tokens(vec![
            temp.clone().into(),
            "x".into(),
            press.clone().into(),
            "y".into(),
            humid.into(),
            "bogus".into(),
        ]))
        .unwrap();

    assert_eq!(
        resolution.mappings,
        vec![
            RoleMapping::new(temp, ScalarRole::XAxis),
            RoleMapping::new(press, ScalarRole::YAxis),
        ]
    );
    assert_eq!(resolution.unresolved_names(), vec!["bogus"]);
}

#[test]
fn test_make_mapping_odd_length_fails() {
    let temp = ScalarType::new("temp");
    let err = toolkit()
        .make_mapping(&tokens(vec![temp.into(), "x".into(), "y".into()]))
        .unwrap_err();

    assert!(matches!(
        err,
        DisplayError::Configuration(ConfigurationError::OddPairCount { len: 3 })
    ));
}

// === Display Selection ===

#[test]
fn test_absent_mappings_give_3d_display() {
    let display = toolkit().make_display(None).unwrap();
    assert_eq!(display.kind(), SurfaceKind::three_d());
}

#[test]
fn test_xy_mappings_give_flattened_display() {
    let maps = vec![
        RoleMapping::new(ScalarType::new("temp"), ScalarRole::XAxis),
        RoleMapping::new(ScalarType::new("press"), ScalarRole::YAxis),
    ];

    let display = toolkit().make_display(Some(maps.as_slice())).unwrap();

    assert_eq!(display.kind().dimensionality, Dimensionality::ThreeD);
    assert!(display.kind().flattened);
    assert_eq!(display.mappings(), maps.as_slice());
    assert!(!display.mappings().iter().any(|m| m.role == ScalarRole::ZAxis));
}

#[test]
fn test_depth_mapping_gives_full_3d_display() {
    let maps = vec![
        RoleMapping::new(ScalarType::new("lon"), ScalarRole::XAxis),
        RoleMapping::new(ScalarType::new("alt"), ScalarRole::ZAxis),
    ];
    let display = toolkit().make_display(Some(maps.as_slice())).unwrap();
    assert_eq!(display.kind(), SurfaceKind::three_d());
}

#[rstest]
#[case(None)]
#[case(Some(vec![ScalarRole::ZAxis]))]
#[case(Some(vec![ScalarRole::XAxis, ScalarRole::Hue]))]
fn test_no_3d_engine_always_2d(#[case] roles: Option<Vec<ScalarRole>>) {
    let maps: Option<Vec<RoleMapping>> = roles.map(|roles| {
        roles
            .into_iter()
            .map(|role| RoleMapping::new(ScalarType::new("t"), role))
            .collect()
    });

    let display = toolkit_with(DisplayConfig::without_3d())
        .make_display(maps.as_deref())
        .unwrap();

    assert_eq!(display.kind(), SurfaceKind::two_d());
    assert_eq!(display.projection().entries(), &[1.4, 0.0, 0.0, -1.4, 0.0, 0.0]);
}

#[test]
fn test_3d_display_is_maximized() {
    let display = toolkit().make_display(None).unwrap();
    let entries = display.projection().entries().to_vec();

    assert_eq!(entries.len(), 16);
    assert_eq!(entries[0], 0.95);
    assert_eq!(entries[5], 0.95);
    assert_eq!(entries[10], 0.95);
    assert_eq!(entries[15], 1.0);
}

// === Axis Inference and Drawing ===

#[test]
fn test_generic_axes_are_stable() {
    let toolkit = toolkit();
    let mut registry = MemoryCellRegistry::new();

    let first = toolkit
        .infer_domain(DrawTarget::None, &mut registry, 2)
        .unwrap();
    let second = toolkit
        .infer_domain(DrawTarget::None, &mut registry, 2)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.x, Some(ScalarType::shared("x")));
    assert_eq!(first.y, Some(ScalarType::shared("y")));
}

#[test]
fn test_draw_with_explicit_domain() {
    let toolkit = toolkit();
    let mut display = toolkit.make_display(None).unwrap();
    let mut registry = MemoryCellRegistry::new();
    let domain = vec![ScalarType::new("time"), ScalarType::new("level")];

    let reference = toolkit
        .draw_primitive(
            DrawTarget::Existing(&mut display),
            &mut registry,
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
            None,
            Some(DataType::from(domain.clone())),
        )
        .unwrap();

    let data = reference.data().unwrap();
    let primitive = data.as_primitive().unwrap();
    assert_eq!(primitive.point_count(), 2);
    assert_eq!(primitive.domain(), domain.as_slice());
    assert_eq!(reference.name(), "linesegment");
    assert_eq!(display.reference_names(), vec!["linesegment".to_string()]);
}

#[test]
fn test_draw_on_named_cell_uses_its_axes() {
    let toolkit = toolkit();
    let lon = ScalarType::new("lon");
    let lat = ScalarType::new("lat");
    let maps = vec![
        RoleMapping::new(lon.clone(), ScalarRole::XAxis),
        RoleMapping::new(lat.clone(), ScalarRole::YAxis),
    ];
    let display = toolkit.make_display(Some(maps.as_slice())).unwrap();

    let mut registry = MemoryCellRegistry::new();
    registry.insert("A1", display);

    let reference = toolkit
        .draw_primitive(
            DrawTarget::Named("A1"),
            &mut registry,
            vec![vec![-100.0, 40.0], vec![-90.0, 45.0], vec![-80.0, 50.0]],
            Some(Color::from_rgb8(255, 0, 0)),
            None,
        )
        .unwrap();

    let primitive = reference.data().and_then(|d| d.as_primitive().cloned()).unwrap();
    assert_eq!(primitive.domain(), &[lon, lat]);
    assert_eq!(primitive.point_count(), 3);

    let cell = registry.get("A1").unwrap();
    let attached = cell.reference("linesegment").unwrap();
    let roles: Vec<_> = attached.constants.iter().map(|c| c.role).collect();
    assert_eq!(roles, vec![ScalarRole::Red, ScalarRole::Green, ScalarRole::Blue]);
    assert_eq!(attached.constants[0].value, 1.0);
    assert_eq!(attached.constants[1].value, 0.0);
    assert_eq!(reference.constants(), attached.constants);
}

#[test]
fn test_draw_3d_on_flat_display_fails() {
    init_tracing();
    let toolkit = toolkit();
    let maps = vec![
        RoleMapping::new(ScalarType::new("a"), ScalarRole::XAxis),
        RoleMapping::new(ScalarType::new("b"), ScalarRole::YAxis),
    ];
    let mut display = toolkit.make_display(Some(maps.as_slice())).unwrap();
    let mut registry = MemoryCellRegistry::new();

    let err = toolkit
        .draw_primitive(
            DrawTarget::Existing(&mut display),
            &mut registry,
            vec![vec![0.0, 0.0, 0.0]],
            None,
            None,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        DisplayError::Axis(AxisError::Missing { axis: Axis::Z })
    ));
}

#[test]
fn test_draw_on_unmapped_display_uses_generic_axes() {
    let toolkit = toolkit();
    let mut display = toolkit.make_display(None).unwrap();
    let mut registry = MemoryCellRegistry::new();

    let reference = toolkit
        .draw_primitive(
            DrawTarget::Existing(&mut display),
            &mut registry,
            vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]],
            None,
            None,
        )
        .unwrap();

    let primitive = reference.data().and_then(|d| d.as_primitive().cloned()).unwrap();
    let names: Vec<_> = primitive.domain().iter().map(|t| t.name().to_string()).collect();
    assert_eq!(names, vec!["x", "y", "z"]);
}

#[test]
fn test_strict_axes_fail_at_inference() {
    let config = DisplayConfig {
        strict_axes: true,
        ..DisplayConfig::default()
    };
    let toolkit = toolkit_with(config);
    let maps = vec![RoleMapping::new(ScalarType::new("a"), ScalarRole::XAxis)];
    let mut display = toolkit.make_display(Some(maps.as_slice())).unwrap();
    let mut registry = MemoryCellRegistry::new();

    let err = toolkit
        .infer_domain(DrawTarget::Existing(&mut display), &mut registry, 2)
        .unwrap_err();
    assert!(matches!(err, DisplayError::Axis(_)));
}

// === Reference Binding ===

#[test]
fn test_bind_reference_and_rebind() {
    let toolkit = toolkit();
    let mut display: MemorySurface = toolkit.make_display(None).unwrap();

    let reference = toolkit
        .bind_reference("field", None, &mut display, None)
        .unwrap();
    assert!(!reference.is_bound());

    let handle = display.reference("field").unwrap().reference.clone();
    handle.set_data(BoundData::opaque(vec![1.0_f64, 2.0, 3.0]));

    let data = reference.data().unwrap();
    assert_eq!(data.downcast_ref::<Vec<f64>>(), Some(&vec![1.0, 2.0, 3.0]));
    assert!(reference.constants().is_empty());
}

#[test]
fn test_duplicate_reference_policy() {
    let strict = toolkit_with(DisplayConfig {
        reject_duplicate_references: true,
        ..DisplayConfig::default()
    });
    let mut display = strict.make_display(None).unwrap();

    strict.bind_reference("ref", None, &mut display, None).unwrap();
    let err = strict
        .bind_reference("ref", None, &mut display, None)
        .unwrap_err();
    assert!(matches!(err, DisplayError::DuplicateReference { .. }));
}

// === Configuration ===

#[test]
fn test_toolkit_rejects_config_with_blank_reference_name() {
    let config = DisplayConfig::from_toml(
        r#"
        three_d_available = false
        primitive_reference_name = ""
        "#,
    )
    .unwrap();

    let result = DisplayToolkit::new(MemoryEngine::new(), config);
    assert!(matches!(result, Err(DisplayError::Config(_))));
}

#[test]
fn test_toolkit_from_loaded_config_names_surfaces() {
    let config = DisplayConfig::from_toml(
        r#"
        surface_name_3d = "Globe"
        primitive_reference_name = "track"
        "#,
    )
    .unwrap();
    let toolkit = toolkit_with(config);
    let mut display = toolkit.make_display(None).unwrap();
    let mut registry = MemoryCellRegistry::new();

    let reference = toolkit
        .draw_primitive(
            DrawTarget::Existing(&mut display),
            &mut registry,
            vec![vec![0.0, 0.0], vec![1.0, 1.0]],
            None,
            None,
        )
        .unwrap();

    assert_eq!(display.name(), "Globe");
    assert_eq!(reference.name(), "track");
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn prop_partial_resolution(names in prop::collection::vec("[a-z0-9]{1,12}", 0..12)) {
        let pairs: Vec<(ScalarType, String)> = names
            .iter()
            .map(|name| (ScalarType::new("t"), name.clone()))
            .collect();

        let resolution = implore_display::mapping::resolve_pairs(pairs);

        let known: Vec<_> = names.iter().filter(|n| ScalarRole::lookup(n).is_some()).collect();
        let unknown: Vec<_> = names.iter().filter(|n| ScalarRole::lookup(n).is_none()).collect();

        prop_assert_eq!(resolution.mappings.len(), known.len());
        prop_assert_eq!(resolution.unresolved.len(), unknown.len());
        for (mapping, name) in resolution.mappings.iter().zip(known) {
            prop_assert_eq!(Some(mapping.slot_index()), ScalarRole::lookup(name).map(|r| r.slot_index()));
        }
    }

    #[test]
    fn prop_maximize_3d_touches_only_diagonal(entries in prop::collection::vec(-10.0f64..10.0, 11..20)) {
        let output = ProjectionMatrix::new(entries.clone()).maximized();
        for (index, value) in output.entries().iter().enumerate() {
            if matches!(index, 0 | 5 | 10) {
                prop_assert_eq!(*value, 0.95);
            } else {
                prop_assert_eq!(*value, entries[index]);
            }
        }
    }

    #[test]
    fn prop_maximize_2d_touches_two_entries(entries in prop::collection::vec(-10.0f64..10.0, 4..=10)) {
        let output = ProjectionMatrix::new(entries.clone()).maximized();
        for (index, value) in output.entries().iter().enumerate() {
            match index {
                0 => prop_assert_eq!(*value, 1.4),
                3 => prop_assert_eq!(*value, -1.4),
                _ => prop_assert_eq!(*value, entries[index]),
            }
        }
    }
}
