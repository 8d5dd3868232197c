//! Strategy Engine Integration Tests
//!
//! Drives the engine the way the training pipeline does: raw JSON
//! configuration in, patch sequences out. Verifies:
//! - Patch counts and shapes per strategy
//! - Mashup/vocal alignment through every dual path
//! - The energy-filter threshold contract
//! - Fingerprint stability for cache keying
//! - Registry enumeration for config validation tooling

use ndarray::Array3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use sp_chop::{ChopConfig, Chopper, FilterMetric, StrategyKind};

/// Matrix whose cells encode their own coordinates
fn coords(freq_bins: usize, time_frames: usize, channels: usize) -> Array3<f32> {
    Array3::from_shape_fn((freq_bins, time_frames, channels), |(f, t, c)| {
        (f * 10_000 + t * 10 + c) as f32
    })
}

fn chopper(name: &str, params: serde_json::Value) -> Chopper {
    let serde_json::Value::Object(map) = params else {
        panic!("params must be an object");
    };
    Chopper::from_config(&ChopConfig::new(name, map)).expect("valid config")
}

#[test]
fn test_tile_partition_counts() {
    // [8,10,2] at scale 4: 2 time steps x 2 freq steps
    let m = coords(8, 10, 2);
    let patches = chopper("tile", json!({ "scale": 4 })).chop(m.view()).unwrap();

    assert_eq!(patches.len(), 4);
    for patch in &patches {
        assert_eq!(patch.dim(), (4, 4, 2));
    }
}

#[test]
fn test_tile_exact_division_property() {
    // scale divides both axes: (F/s) * (T/s) patches
    let m = coords(16, 24, 3);
    let patches = chopper("tile", json!({ "scale": 8 })).chop(m.view()).unwrap();

    assert_eq!(patches.len(), (16 / 8) * (24 / 8));
    for patch in &patches {
        assert_eq!(patch.dim(), (8, 8, 3));
    }
}

#[test]
fn test_full_band_properties() {
    let m = coords(8, 12, 2);

    // Non-upper: bin 0 (coordinate values < 10_000) never appears
    let lower = chopper("full", json!({ "scale": 4 })).chop(m.view()).unwrap();
    assert_eq!(lower.len(), 3);
    for patch in &lower {
        assert_eq!(patch.dim(), (7, 4, 2));
        assert!(patch.iter().all(|&v| v >= 10_000.0));
    }

    // Upper: frequency extent is F/2, starting at bin 0
    let upper = chopper("full", json!({ "scale": 4, "upper": true }))
        .chop(m.view())
        .unwrap();
    for patch in &upper {
        assert_eq!(patch.dim().0, 4);
        assert_eq!(patch[[0, 0, 0]] as usize / 10_000, 0);
    }
}

#[test]
fn test_sliding_family_through_engine() {
    let m = coords(16, 16, 1);

    let windows = chopper("sliding", json!({ "scale": 4, "step": 2 }))
        .chop(m.view())
        .unwrap();
    assert_eq!(windows.len(), 36);

    let strips = chopper("sliding_full", json!({ "scale": 4, "step": [2, 5] }))
        .chop(m.view())
        .unwrap();
    assert_eq!(strips.len(), 6);
    for strip in &strips {
        assert_eq!(strip.dim(), (15, 4, 1));
    }
}

#[test]
fn test_small_matrix_yields_empty_not_error() {
    let m = coords(3, 3, 2);

    for (name, params) in [
        ("tile", json!({ "scale": 4 })),
        ("full", json!({ "scale": 4 })),
        ("sliding", json!({ "scale": 4, "step": 1 })),
        ("sliding_full", json!({ "scale": 4, "step": 1 })),
    ] {
        let patches = chopper(name, params).chop(m.view()).unwrap();
        assert!(patches.is_empty(), "{name} should produce zero patches");
    }
}

#[test]
fn test_infer_sequential_cover() {
    let m = coords(8, 10, 2);
    let patches = chopper("infer", json!({ "scale": 4 })).chop(m.view()).unwrap();

    assert_eq!(patches.len(), 10 / 4 + 1);
    // Full frequency axis, trailing remainder strip
    assert_eq!(patches[0].dim(), (8, 4, 2));
    assert_eq!(patches[2].dim(), (8, 2, 2));
}

#[test]
fn test_filtered_retained_patches_beat_threshold() {
    let vocal = Array3::from_shape_fn((12, 16, 1), |(f, t, _)| ((f * 7 + t * 3) % 11) as f32);
    let mashup = &vocal + 1000.0;
    let engine = chopper("filtered", json!({ "scale": 4 }));

    let (m, v) = engine.chop_pair(mashup.view(), vocal.view()).unwrap();
    assert_eq!(m.len(), v.len());

    // Recompute the unfiltered tile-grid baseline independently
    let baseline = chopper("tile", json!({ "scale": 4 })).chop(vocal.view()).unwrap();
    let total: f32 = baseline.iter().map(|p| p.sum()).sum();
    let threshold = total / (baseline.len() * baseline[0].len()) as f32;

    assert!(!v.is_empty());
    for patch in &v {
        assert!(FilterMetric::Mean.measure(patch.view()) > threshold);
    }
}

#[test]
fn test_filtered_full_pairs_stay_aligned() {
    let vocal = Array3::from_shape_fn((8, 16, 2), |(f, t, c)| ((f + t * 2 + c) % 5) as f32);
    let mashup = &vocal * 2.0;
    let engine = chopper("filtered_full", json!({ "scale": 4 }));

    let (m, v) = engine.chop_pair(mashup.view(), vocal.view()).unwrap();

    assert_eq!(m.len(), v.len());
    for (mp, vp) in m.iter().zip(&v) {
        assert_eq!(mp.dim(), vp.dim());
        assert_eq!(mp, &(vp * 2.0));
    }
}

#[test]
fn test_random_draw_contract() {
    let vocal = coords(8, 10, 2);
    let mashup = &vocal + 0.5;
    let engine = chopper("random", json!({ "scale": 4, "slices": 3 }));

    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let (m, v) = engine
        .chop_pair_with_rng(mashup.view(), vocal.view(), &mut rng)
        .unwrap();

    assert_eq!(m.len(), 3);
    assert_eq!(v.len(), 3);
    for (mp, vp) in m.iter().zip(&v) {
        assert_eq!(mp.dim(), (4, 4, 2));
        // Same draw coordinates in both matrices
        assert_eq!(mp[[0, 0, 0]], vp[[0, 0, 0]] + 0.5);
    }
}

#[test]
fn test_random_full_draw_contract() {
    let vocal = coords(8, 20, 1);
    let mashup = vocal.clone();
    let engine = chopper("random_full", json!({ "scale": 4, "slices": 5 }));

    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let (m, v) = engine
        .chop_pair_with_rng(mashup.view(), vocal.view(), &mut rng)
        .unwrap();

    assert_eq!(m.len(), 5);
    for patch in &v {
        assert_eq!(patch.dim(), (7, 4, 1));
    }
}

#[test]
fn test_fingerprint_cache_key_contract() {
    let a = ChopConfig::new("sliding", to_map(json!({ "scale": 32, "step": 8 })));
    let b = ChopConfig::new("sliding", to_map(json!({ "step": 8, "scale": 32 })));
    let c = ChopConfig::new("sliding", to_map(json!({ "scale": 32, "step": 4 })));
    let d = ChopConfig::new("sliding_full", to_map(json!({ "scale": 32, "step": 8 })));

    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
    assert_ne!(a.fingerprint(), d.fingerprint());
}

fn to_map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    let serde_json::Value::Object(map) = value else {
        panic!("params must be an object");
    };
    map
}

#[test]
fn test_registry_enumeration_for_tooling() {
    let names = StrategyKind::names();

    for name in [
        "tile",
        "full",
        "sliding",
        "sliding_full",
        "infer",
        "filtered",
        "filtered_full",
        "random",
        "random_full",
    ] {
        assert!(names.contains(&name), "missing {name}");
        // Every listed name must bind (given suitable params)
        assert!(StrategyKind::from_name(name).is_ok());
    }
    assert_eq!(names.len(), 9);
}
