//! End-to-end tests for `uhk80-keycaps export`.

mod fixtures;
use fixtures::*;

#[cfg(not(feature = "csg"))]
#[test]
fn test_export_without_csg_feature() {
    let env = TestEnv::new();
    let output = env.run(&["export"]);
    assert_code(&output, 1);
    assert!(stderr(&output).contains("'csg' feature"));
}

#[cfg(feature = "csg")]
mod with_csg {
    use super::*;

    fn one_key_layout(env: &TestEnv) -> String {
        env.write_file(
            "one.toml",
            "[[keys]]\nrow = 3\nlegend = \"\"\nx = 0.0\ny = 0.0\n",
        )
        .to_string_lossy()
        .to_string()
    }

    #[test]
    fn test_export_combined() {
        let env = TestEnv::new();
        let layout = one_key_layout(&env);
        let out_path = env.path().join("caps.stl");

        let output = env.run(&[
            "export",
            "--layout",
            &layout,
            "--output",
            out_path.to_str().unwrap(),
        ]);
        assert_code(&output, 0);

        let mut file = std::fs::File::open(&out_path).unwrap();
        let mesh = stl_io::read_stl(&mut file).unwrap();
        assert!(!mesh.faces.is_empty());
    }

    #[test]
    fn test_export_split() {
        let env = TestEnv::new();
        let layout = one_key_layout(&env);
        let dir = env.path().join("parts");

        let output = env.run(&["export", "--layout", &layout, "--split", dir.to_str().unwrap()]);
        assert_code(&output, 0);
        assert!(dir.join("key_0.stl").exists());
    }

    #[test]
    fn test_export_missing_font() {
        let env = TestEnv::new();
        let layout = one_key_layout(&env);

        let output = env.run(&["export", "--layout", &layout, "--font", "missing.ttf"]);
        assert_code(&output, 2);
        assert!(stderr(&output).contains("Failed to read font file"));
    }

    #[test]
    fn test_export_rejects_invalid_layout() {
        let env = TestEnv::new();
        let layout = env.write_layout("broken.toml", &broken_layout());
        let out_path = env.path().join("caps.stl");

        let output = env.run(&[
            "export",
            "--layout",
            layout.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ]);
        assert_code(&output, 1);
        assert!(stderr(&output).contains("Layout validation failed"));
        assert!(!out_path.exists());
    }
}
