//! Full pipeline over a miniature reference-data tree

use serde_json::{json, Value};
use shield_loadouts::core::config::PipelineConfig;
use shield_loadouts::core::error::DataError;
use shield_loadouts::pipeline::{run, write_data_file};
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn write_json(root: &Path, relative: &str, value: Value) {
    write(root, relative, &serde_json::to_string_pretty(&value).unwrap());
}

fn standard(key: &str, class: u8, rating: &str, symbol: &str) -> Value {
    json!({ key: [
        { "class": 1, "rating": "A", "symbol": format!("{}_other", symbol) },
        { "class": class, "rating": rating, "symbol": symbol }
    ]})
}

fn generator(symbol: &str, name: &str, rating: &str) -> Value {
    json!({
        "symbol": symbol, "ukName": name, "class": 3, "rating": rating,
        "integrity": 61, "power": 2.52, "explres": 0.5, "kinres": 0.4, "thermres": -0.2,
        "regen": 1.3, "brokenregen": 2.1, "distdraw": 0.6,
        "maxmass": 165, "maxmul": 1.7, "minmass": 83, "minmul": 0.5, "optmass": 165, "optmul": 1.2
    })
}

/// Lay out a minimal coriolis-data + FDevIDs tree with two ships
fn build_tree(root: &Path) {
    let std_dir = "coriolis-data/modules/standard";
    write_json(root, &format!("{}/power_plant.json", std_dir), standard("pp", 2, "E", "int_powerplant_size2_class1"));
    write_json(root, &format!("{}/thrusters.json", std_dir), standard("t", 2, "E", "int_engine_size2_class1"));
    write_json(root, &format!("{}/frame_shift_drive.json", std_dir), standard("fsd", 2, "E", "int_hyperdrive_size2_class1"));
    write_json(root, &format!("{}/life_support.json", std_dir), standard("ls", 1, "E", "int_lifesupport_size1_class1"));
    write_json(root, &format!("{}/power_distributor.json", std_dir), standard("pd", 1, "E", "int_powerdistributor_size1_class1"));
    write_json(root, &format!("{}/sensors.json", std_dir), standard("s", 1, "E", "int_sensors_size1_class1"));
    write_json(root, &format!("{}/fuel_tank.json", std_dir), standard("ft", 1, "C", "int_fueltank_size1_class3"));

    write(
        root,
        "FDevIDs/shipyard.csv",
        "id,symbol,name\n128049249,SideWinder,Sidewinder\n128049255,Eagle,Eagle\n",
    );

    let hull = |name: &str, hardpoints: Value, internal: Value| {
        json!({ name.to_lowercase(): {
            "properties": { "name": name, "baseShieldStrength": 40, "hullMass": 25 },
            "slots": { "hardpoints": hardpoints, "internal": internal },
            "defaults": { "standard": ["2E", "2E", "2E", "1E", "1E", "1E", "1C"] }
        }})
    };
    write_json(root, "coriolis-data/ships/sidewinder.json", hull("Sidewinder", json!([1, 1, 0, 0]), json!([2, 2, 1])));
    write_json(root, "coriolis-data/ships/nested/eagle.json", hull("Eagle", json!([1, 1, 1, 0]), json!([3, 2])));

    write_json(root, "coriolis-data/modules/internal/shield_generator.json", json!({ "sg": [
        generator("int_shieldgenerator_size3_class5", "Shield Generator", "A"),
        generator("int_shieldgenerator_size3_class1", "Shield Generator", "E")
    ]}));
    write_json(root, "coriolis-data/modules/internal/bi_weave_shield_generator.json", json!({ "bsg": [
        generator("int_shieldgenerator_size3_class3_fast", "Bi-Weave Shield", "C")
    ]}));
    write_json(root, "coriolis-data/modules/internal/pristmatic_shield_generator.json", json!({ "psg": [
        generator("int_shieldgenerator_size3_class5_strong", "Prismatic Shield", "A"),
        generator("int_shieldgenerator_size3_class2_strong", "Prismatic Shield", "B")
    ]}));

    write_json(root, "coriolis-data/modules/hardpoints/shield_booster.json", json!({ "sb": [
        { "symbol": "hpt_shieldbooster_size0_class1", "rating": "E", "integrity": 25, "mass": 0.5,
          "power": 0.2, "shieldboost": 0.04, "explres": 0, "kinres": 0, "thermres": 0 },
        { "symbol": "hpt_shieldbooster_size0_class5", "rating": "A", "integrity": 48, "mass": 3.5,
          "power": 1.2, "shieldboost": 0.2, "explres": 0, "kinres": 0, "thermres": 0 }
    ]}));

    let blueprint = |symbol: &str, name: &str, features: Value| {
        json!({ "name": name, "fdname": symbol, "grades": { "5": { "features": features } } })
    };
    write_json(root, "coriolis-data/modifications/blueprints.json", json!({
        "ShieldBooster_HeavyDuty": blueprint("ShieldBooster_HeavyDuty", "Heavy duty",
            json!({ "integrity": [0.6, 0.8], "shieldboost": [0.2, 0.3], "power": [0.5, 0.5] })),
        "ShieldBooster_Kinetic": blueprint("ShieldBooster_Kinetic", "Kinetic resistant",
            json!({ "kinres": [0.1, 0.2], "thermres": [0, -0.02] })),
        "ShieldBooster_Thermic": blueprint("ShieldBooster_Thermic", "Thermal resistant",
            json!({ "thermres": [0.1, 0.2], "kinres": [0, -0.02] })),
        "ShieldBooster_Explosive": blueprint("ShieldBooster_Explosive", "Blast resistant",
            json!({ "explres": [0.1, 0.27], "kinres": [0, -0.02] })),
        "ShieldBooster_Resistive": blueprint("ShieldBooster_Resistive", "Resistance augmented",
            json!({ "explres": [0.05, 0.1], "kinres": [0.05, 0.1], "thermres": [0.05, 0.1] })),
        "ShieldGenerator_Kinetic": blueprint("ShieldGenerator_Kinetic", "Kinetic resistant",
            json!({ "kinres": [0.2, 0.5] })),
        "ShieldGenerator_Reinforced": blueprint("ShieldGenerator_Reinforced", "Reinforced",
            json!({ "optmul": [0.2, 0.4], "explres": [0.1, 0.2] })),
        "ShieldGenerator_Thermic": blueprint("ShieldGenerator_Thermic", "Thermal resistant",
            json!({ "thermres": [0.2, 0.5] }))
    }));

    let specials = [
        ("special_shieldbooster_thermic", "Thermo Block"),
        ("special_shieldbooster_kinetic", "Force Block"),
        ("special_shieldbooster_explosive", "Blast Block"),
        ("special_shieldbooster_chunky", "Super Capacitors"),
        ("special_shield_regenerative", "Regeneration Sequence"),
        ("special_shield_resistive", "Hi-Cap"),
        ("special_shield_health", "Fast Charge"),
        ("special_shield_thermic", "Thermo Block"),
        ("special_shield_kinetic", "Force Block"),
    ];
    let mut specials_json = serde_json::Map::new();
    let mut actions_json = serde_json::Map::new();
    for (symbol, name) in specials {
        specials_json.insert(symbol.to_string(), json!({ "name": name, "edname": symbol }));
        actions_json.insert(symbol.to_string(), json!({ "integrity": 0.05 }));
    }
    actions_json.insert("special_shieldbooster_kinetic".to_string(), json!({ "kinres": 8 }));
    write_json(root, "coriolis-data/modifications/specials.json", Value::Object(specials_json));
    write_json(root, "coriolis-data/modifications/modifierActions.json", Value::Object(actions_json));
}

#[test]
fn test_pipeline_produces_three_key_data_file() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    let data = run(&PipelineConfig::default(), dir.path()).unwrap();
    let output = dir.path().join("data.json");
    write_data_file(&data, &output).unwrap();

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 3);
    for key in ["ships", "shield_booster_variants", "shield_generators"] {
        assert!(value.get(key).is_some(), "missing top-level key {}", key);
    }

    // ships
    let ships = value["ships"].as_array().unwrap();
    assert_eq!(ships.len(), 2);
    let eagle = ships.iter().find(|s| s["symbol"] == "Eagle").unwrap();
    assert_eq!(eagle["utility_slots"], 1);
    assert_eq!(eagle["highest_internal"], 3);
    assert_eq!(eagle["baseShieldStrength"], json!(40));
    assert_eq!(eagle["loadout_template"]["Modules"][0]["Item"], "Eagle_armour_grade1");
    assert_eq!(eagle["loadout_template"]["Modules"][1]["Item"], "int_powerplant_size2_class1");
    assert_eq!(eagle["loadout_template"]["Modules"].as_array().unwrap().len(), 10);

    // boosters: 5 blueprints x 4 experimentals
    let variants = value["shield_booster_variants"].as_array().unwrap();
    assert_eq!(variants.len(), 20);
    for variant in variants {
        let template = &variant["loadout_template"];
        assert_eq!(template["Item"], "hpt_shieldbooster_size0_class5");
        assert_eq!(template["Slot"], "");
        assert_eq!(template["Engineering"]["Level"], json!(5));
        assert_eq!(template["Engineering"]["Quality"], json!(1));
    }
    let heavy_force = variants
        .iter()
        .find(|v| v["engineering"] == "Heavy duty" && v["experimental"] == "Force Block")
        .unwrap();
    // 1 - (1 - 0) * (1 - 0.08)
    assert_eq!(heavy_force["kin_res_bonus"], 0.08);
    assert_eq!(heavy_force["can_skip"], false);
    let labels: Vec<_> = heavy_force["loadout_template"]["Engineering"]["Modifiers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["Label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        labels,
        vec!["Integrity", "PowerDraw", "DefenceModifierShieldMultiplier", "KineticResistance"]
    );
    assert_eq!(
        variants.iter().filter(|v| v["can_skip"] == true).count(),
        // 4 Blast resistant variants + 5 Blast Block variants - 1 overlap
        8
    );

    // shield generators
    let generators = &value["shield_generators"];
    assert_eq!(generators["modules"]["normal"].as_array().unwrap().len(), 1);
    assert_eq!(generators["modules"]["bi-weave"].as_array().unwrap().len(), 1);
    assert_eq!(generators["modules"]["prismatic"].as_array().unwrap().len(), 1);
    assert_eq!(generators["modules"]["normal"][0]["name"], "Shield Generator");
    assert_eq!(generators["engineering"]["blueprints"].as_array().unwrap().len(), 3);
    assert_eq!(
        generators["engineering"]["experimental_effects"].as_array().unwrap().len(),
        5
    );
    let reinforced = generators["engineering"]["blueprints"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["symbol"] == "ShieldGenerator_Reinforced")
        .unwrap();
    assert_eq!(reinforced["features"]["optmul"], 0.4);
}

#[test]
fn test_missing_blueprint_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    let mut config = PipelineConfig::default();
    config
        .shield_booster
        .engineering
        .blueprints
        .insert("ShieldBooster_Unknown".to_string());

    let output = dir.path().join("data.json");
    let result = run(&config, dir.path()).and_then(|data| write_data_file(&data, &output));
    match result {
        Err(DataError::MissingReference { table, symbol }) => {
            assert_eq!(table, "blueprints");
            assert_eq!(symbol, "ShieldBooster_Unknown");
        }
        other => panic!("Expected MissingReference, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_unknown_ship_aborts() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());
    write(dir.path(), "FDevIDs/shipyard.csv", "id,symbol,name\n128049249,SideWinder,Sidewinder\n");

    let result = run(&PipelineConfig::default(), dir.path());
    assert!(matches!(result, Err(DataError::MissingReference { table: "shipyard", .. })));
}

#[test]
fn test_config_file_changes_baseline_rating() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());
    let config_path = dir.path().join("shield.toml");
    write(
        dir.path(),
        "shield.toml",
        r#"
[shield_booster]
rating = "E"

[shield_booster.engineering]
blueprints = ["ShieldBooster_HeavyDuty"]
experimentals = ["special_shieldbooster_chunky", "special_shieldbooster_kinetic"]
"#,
    );

    let config = PipelineConfig::load(&config_path).unwrap();
    let data = run(&config, dir.path()).unwrap();
    assert_eq!(data.shield_booster_variants.len(), 2);
    assert!(data
        .shield_booster_variants
        .iter()
        .all(|v| v.loadout_template.item == "hpt_shieldbooster_size0_class1"));
}
