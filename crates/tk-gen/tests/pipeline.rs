//! End-to-end generator tests: generate, resolve, query.

use nalgebra::Vector3;
use tk_creator::{NullWorld, StructureInfo};
use tk_gen::{
    ChainConfig, attach_mount_markers, build_chain, load_json, parse_json, spine_build_spec,
    tetra_prototype,
};
use tk_model::Model;

fn default_prototype() -> tk_structure::Structure {
    let edge = 38.1;
    tetra_prototype(edge, 3.0_f64.sqrt() / 2.0 * edge).unwrap()
}

#[test]
fn three_segment_spine_yields_18_24_12() {
    let proto = default_prototype();
    let config = ChainConfig {
        segments: 3,
        offset: Vector3::new(0.0, 0.0, -21.5),
    };
    let chain = build_chain(&proto, &config).unwrap();
    let spec = spine_build_spec().unwrap();

    let mut model = Model::new();
    StructureInfo::new(&chain, &spec)
        .build_into(&mut model, &mut NullWorld)
        .unwrap();

    assert_eq!(chain.total_nodes(), 18);
    assert_eq!(model.rigids().len(), 24);
    assert_eq!(model.actuators().len(), 12);

    // 6 muscles per adjacent-segment boundary, by group
    let groups = model.actuator_groups(&["outer", "inner", "top muscle"]);
    assert_eq!(groups["outer"].len(), 6);
    assert_eq!(groups["inner"].len(), 6);
    assert_eq!(groups["top muscle"].len(), 4);
}

#[test]
fn spine_model_steps_and_tears_down() {
    let proto = default_prototype();
    let chain = build_chain(&proto, &ChainConfig::default()).unwrap();
    let spec = spine_build_spec().unwrap();

    let mut model = Model::new();
    StructureInfo::new(&chain, &spec)
        .build_into(&mut model, &mut NullWorld)
        .unwrap();

    assert!(model.advance(1e-3).is_ok());
    assert!(model.advance(0.0).is_err());

    model.teardown();
    assert!(model.rigids().is_empty());
    assert!(model.actuators().is_empty());
}

#[test]
fn mount_markers_attach_per_segment() {
    let proto = default_prototype();
    let config = ChainConfig {
        segments: 3,
        offset: Vector3::new(0.0, 0.0, -21.5),
    };
    let chain = build_chain(&proto, &config).unwrap();
    let spec = spine_build_spec().unwrap();

    let mut model = Model::new();
    StructureInfo::new(&chain, &spec)
        .build_into(&mut model, &mut NullWorld)
        .unwrap();

    // Two mount nodes per segment
    let attached = attach_mount_markers(&chain, &mut model).unwrap();
    assert_eq!(attached, 6);
    assert_eq!(model.markers().len(), 6);
    assert_eq!(model.markers()[0].ordinal, 0);
    assert_eq!(model.markers()[5].ordinal, 2);
}

#[test]
fn mount_markers_reject_mismatched_model() {
    let proto = default_prototype();
    let spec = spine_build_spec().unwrap();

    // Model resolved from a shorter chain than the one queried
    let short = build_chain(
        &proto,
        &ChainConfig {
            segments: 1,
            ..ChainConfig::default()
        },
    )
    .unwrap();
    let mut model = Model::new();
    StructureInfo::new(&short, &spec)
        .build_into(&mut model, &mut NullWorld)
        .unwrap();

    let long = build_chain(
        &proto,
        &ChainConfig {
            segments: 2,
            ..ChainConfig::default()
        },
    )
    .unwrap();
    assert!(attach_mount_markers(&long, &mut model).is_err());
}

#[test]
fn document_loads_from_disk() {
    let content = r#"{
        "structure": {
            "nodes": [[0.0, 0.0, 0.0], [0.0, 10.0, 0.0], [10.0, 0.0, 0.0]],
            "rods": [[1, 2]],
            "muscles": [[2, 3], [1, 3]]
        },
        "parameters": {
            "rods": { "radius": 0.5, "density": 1.75 },
            "muscles": { "stiffness": 600.0, "damping": 200.0, "pretension": 50.0 }
        }
    }"#;
    let path = std::env::temp_dir().join("tk_gen_document_loads_from_disk.json");
    std::fs::write(&path, content).unwrap();

    let from_disk = load_json(&path).unwrap();
    let from_str = parse_json(content).unwrap();
    assert_eq!(from_disk, from_str);

    let _ = std::fs::remove_file(&path);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chain_component_counts_hold_for_any_n(n in 1_usize..7) {
            let proto = default_prototype();
            let config = ChainConfig {
                segments: n,
                offset: Vector3::new(0.0, 0.0, -21.5),
            };
            let chain = build_chain(&proto, &config).unwrap();
            let spec = spine_build_spec().unwrap();

            let mut model = Model::new();
            StructureInfo::new(&chain, &spec)
                .build_into(&mut model, &mut NullWorld)
                .unwrap();

            prop_assert_eq!(chain.total_nodes(), n * 6);
            prop_assert_eq!(model.rigids().len(), n * 8);
            prop_assert_eq!(model.actuators().len(), 6 * (n - 1));
        }
    }
}
