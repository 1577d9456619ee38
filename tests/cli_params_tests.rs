//! End-to-end tests for `uhk80-keycaps params`.

mod fixtures;
use fixtures::*;

#[test]
fn test_params_row_one_json() {
    let env = TestEnv::new();
    let output = env.run(&["params", "--row", "1", "--width", "1", "--json"]);
    assert_code(&output, 0);

    let json = json(&output);
    let params = &json["parameters"];
    assert_eq!(params["row"], 1);
    assert_eq!(params["known_row"], true);
    assert!((params["depth"].as_f64().unwrap() - 12.75).abs() < 1e-9);
    assert!((params["tilt"].as_f64().unwrap() + 3.0).abs() < 1e-9);
    assert!((params["bottom"]["width"].as_f64().unwrap() - 18.16).abs() < 1e-9);

    let lr = params["taper_left_right"].as_f64().unwrap();
    let fb = params["taper_front_back"].as_f64().unwrap();
    assert!((lr - 13.24).abs() < 0.01, "lr = {lr}");
    assert!((fb - (2.0_f64 / 12.75).atan().to_degrees()).abs() < 1e-9, "fb = {fb}");

    assert_eq!(json["spec"]["stem"]["cross_enabled"], true);
}

#[test]
fn test_params_bottom_row_flip() {
    let env = TestEnv::new();
    let output = env.run(&["params", "--row", "5", "--json"]);
    assert_code(&output, 0);

    let params = &json(&output)["parameters"];
    assert!((params["depth"].as_f64().unwrap() - 17.25).abs() < 1e-9);
    assert!((params["tilt"].as_f64().unwrap() - 4.0).abs() < 1e-9);
}

#[test]
fn test_params_two_unit_width() {
    let env = TestEnv::new();
    let output = env.run(&["params", "--row", "3", "--width", "2", "--json"]);
    assert_code(&output, 0);

    let params = &json(&output)["parameters"];
    assert!((params["bottom"]["width"].as_f64().unwrap() - 37.21).abs() < 1e-9);
    assert!((params["top"]["width"].as_f64().unwrap() - 31.21).abs() < 1e-9);
}

#[test]
fn test_params_unknown_row_falls_back() {
    let env = TestEnv::new();
    let output = env.run(&["params", "--row", "99"]);
    assert_code(&output, 0);

    let out = stdout(&output);
    assert!(out.contains("using row 1"), "stdout: {out}");
    assert!(out.contains("12.750"));
}

#[test]
fn test_params_negative_row_falls_back() {
    let env = TestEnv::new();
    let output = env.run(&["params", "--row", "-1", "--json"]);
    assert_code(&output, 0);

    let params = &json(&output)["parameters"];
    assert_eq!(params["row"], -1);
    assert_eq!(params["known_row"], false);
    assert!((params["depth"].as_f64().unwrap() - 12.75).abs() < 1e-9);
    assert!((params["tilt"].as_f64().unwrap() + 3.0).abs() < 1e-9);
}

#[test]
fn test_params_rejects_narrow_width() {
    let env = TestEnv::new();
    let output = env.run(&["params", "--row", "1", "--width", "0.5"]);
    assert_code(&output, 1);
    assert!(stderr(&output).contains("Width must be at least"));
}
