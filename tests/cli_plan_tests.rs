//! End-to-end tests for `uhk80-keycaps plan`.

mod fixtures;
use fixtures::*;

#[test]
fn test_plan_to_stdout() {
    let env = TestEnv::new();
    let output = env.run(&["plan"]);
    assert_code(&output, 0);

    let json = json(&output);
    assert_eq!(json["layout"], "top-row");
    assert_eq!(json["units"], "mm");

    let parts = json["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 18);
    assert_eq!(parts[0]["name"], "key_0");
    assert_eq!(parts[0]["color"]["hex"], "#FFD933");
    assert_eq!(parts[1]["name"], "legend_0");
    assert_eq!(parts[1]["role"], "legend");
    assert_eq!(parts[1]["color"]["hex"], "#262626");
}

#[test]
fn test_plan_to_file() {
    let env = TestEnv::new();
    let out_path = env.path().join("plans").join("caps.json");

    let output = env.run(&[
        "plan",
        "--layout",
        "right-half",
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert_code(&output, 0);
    assert!(stdout(&output).contains("Wrote build plan"));

    let content = std::fs::read_to_string(&out_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["key_count"], 54);

    let caps = json["parts"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["role"] == "cap")
        .count();
    assert_eq!(caps, 54);
}

#[test]
fn test_plan_part_placement() {
    let env = TestEnv::new();
    let path = env.write_layout("small.toml", &small_layout());

    let output = env.run(&["plan", "--layout", path.to_str().unwrap(), "--no-legends"]);
    assert_code(&output, 0);

    let json = json(&output);
    let parts = json["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(json["settings"]["legends"], false);

    // Fn: row 5, x = 7, y = 4
    let fn_key = &parts[2]["solid"];
    assert_eq!(fn_key["op"], "translate");
    assert!((fn_key["offset"][0].as_f64().unwrap() - 7.0 * 19.05).abs() < 1e-9);
    assert!((fn_key["offset"][1].as_f64().unwrap() + 4.0 * 19.05).abs() < 1e-9);
    assert_eq!(fn_key["solid"]["op"], "rotate");
    assert_eq!(fn_key["solid"]["axis"], "x");
    assert_eq!(fn_key["solid"]["degrees"], 4.0);
}

#[test]
fn test_plan_respects_stem_cross_config() {
    let env = TestEnv::new();
    assert_code(&env.run(&["config", "set", "--stem-cross", "false"]), 0);

    let output = env.run(&["plan"]);
    assert_code(&output, 0);
    assert_eq!(json(&output)["settings"]["stem_cross"], false);
}

#[test]
fn test_plan_missing_layout_file() {
    let env = TestEnv::new();
    let output = env.run(&["plan", "--layout", "missing.toml"]);
    assert_code(&output, 2);
}

#[test]
fn test_plan_rejects_invalid_layout() {
    let env = TestEnv::new();
    let path = env.write_file(
        "bad.toml",
        "[[keys]]\nrow = 1\nwidth = 0.1\nlegend = \"Tiny\"\nx = 0.0\ny = 0.0\n\n\
         [[keys]]\nrow = 1\nlegend = \"Lost\"\nx = nan\ny = 0.0\n",
    );

    let output = env.run(&["plan", "--layout", path.to_str().unwrap()]);
    assert_code(&output, 1);
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.contains("Layout validation failed"), "stderr: {err}");
    assert!(err.contains("has width 0.1u"));
    assert!(err.contains("non-finite position"));
}

#[test]
fn test_plan_out_of_table_rows_use_row_one() {
    let env = TestEnv::new();
    let path = env.write_file(
        "rows.toml",
        "[[keys]]\nrow = 300\nlegend = \"A\"\nx = 0.0\ny = 0.0\n\n\
         [[keys]]\nrow = -1\nlegend = \"B\"\nx = 1.0\ny = 0.0\n",
    );

    let output = env.run(&["plan", "--layout", path.to_str().unwrap(), "--no-legends"]);
    assert_code(&output, 0);
    assert!(stderr(&output).contains("row 1 will be used"));

    let json = json(&output);
    for part in json["parts"].as_array().unwrap() {
        let rotate = &part["solid"]["solid"];
        assert_eq!(rotate["op"], "rotate");
        assert_eq!(rotate["degrees"], -3.0);
    }
}
