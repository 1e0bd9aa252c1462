use rand::rngs::StdRng;
use rand::SeedableRng;
use scenery_ir::{ObjectBatch, TransformedDocument};
use scenery_pipeline::{random_objects, GeneratorSettings, Pipeline, PipelineConfig};

#[test]
fn generate_then_transform_through_json() {
    let mut rng = StdRng::seed_from_u64(2024);
    let settings = GeneratorSettings {
        count: 8,
        ..Default::default()
    };

    let input_json = random_objects(&mut rng, &settings).unwrap().to_json().unwrap();
    let batch = ObjectBatch::from_json(&input_json).unwrap();

    let doc = Pipeline::default().run(&batch.objects, &mut rng).unwrap();
    let output_json = doc.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&output_json).unwrap();
    let objects = value["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 8);
    for (obj, original) in objects.iter().zip(&batch.objects) {
        assert_eq!(obj["type"], original.kind.as_str());
        for field in ["position", "scale", "rotation"] {
            for axis in ["x", "y", "z"] {
                assert!(obj[field][axis].is_f64(), "{field}.{axis}");
            }
        }
    }

    let t = &value["transformations"];
    assert_eq!(t["scale_factors"].as_array().unwrap().len(), 3);
    assert_eq!(t["rotation_angles"]["x"], 0);
    assert_eq!(t["rotation_angles"]["z"], 0);
    let y = t["rotation_angles"]["y"].as_i64().unwrap();
    assert!((0..=360).contains(&y));
    for offset in t["translation_vector"].as_array().unwrap() {
        let offset = offset.as_i64().unwrap();
        assert!((0..=50).contains(&offset));
    }

    assert_eq!(TransformedDocument::from_json(&output_json).unwrap(), doc);
}

#[test]
fn empty_input_document_produces_summary() {
    let batch = ObjectBatch::from_json("[]").unwrap();
    let doc = Pipeline::default()
        .run(&batch.objects, &mut StdRng::seed_from_u64(0))
        .unwrap();

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["objects"], serde_json::json!([]));
    assert!(value["transformations"]["scale_factors"].is_array());
}

#[test]
fn config_file_drives_parameter_ranges() {
    let config = PipelineConfig::from_toml_str(
        r#"
        [ranges]
        scale = [1.0, 1.0]
        rotation_y = [180, 180]
        translation = [0, 0]
        "#,
    )
    .unwrap();

    let batch = random_objects(&mut StdRng::seed_from_u64(4), &GeneratorSettings::default()).unwrap();
    let doc = Pipeline::new(config)
        .unwrap()
        .run(&batch.objects, &mut StdRng::seed_from_u64(4))
        .unwrap();

    for (before, after) in batch.objects.iter().zip(&doc.objects) {
        assert_eq!(after.scale, before.scale);
        assert!((after.position.x + before.position.x).abs() < 1e-9);
        assert!((after.position.y - before.position.y).abs() < 1e-9);
        assert!((after.position.z + before.position.z).abs() < 1e-9);
        assert_eq!(after.rotation.y, before.rotation.y + 180.0);
    }
}
