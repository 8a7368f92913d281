#![allow(clippy::unwrap_used, clippy::expect_used)]

use jsongen_codegen::NamingPolicy;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_file_is_default() {
    assert_eq!(DriverConfig::from_toml_str("").unwrap(), DriverConfig::default());
}

#[test]
fn full_file() {
    let config = DriverConfig::from_toml_str(
        r#"
        output_dir = "gen"
        output_suffix = ".json.rs"
        keep_going = true
        log_level = "debug"

        [codegen]
        omit_empty = true
        std_adapters = false
        function_prefix = "write_"
        naming = "kebab_case"
        "#,
    )
    .unwrap();
    assert_eq!(config.output_dir, Some(PathBuf::from("gen")));
    assert_eq!(config.output_suffix, ".json.rs");
    assert!(config.keep_going);
    assert_eq!(config.log_level, "debug");
    assert!(config.codegen.omit_empty);
    assert!(!config.codegen.std_adapters);
    assert_eq!(config.codegen.function_prefix, "write_");
    assert_eq!(config.codegen.naming, NamingPolicy::KebabCase);
    assert_eq!(config.codegen.runtime_path, "::jsongen_rt");
}

#[test]
fn unknown_key_is_a_parse_error() {
    let err = DriverConfig::from_toml_str("outputdir = \"x\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn suffix_must_be_rust_file() {
    let err = DriverConfig::from_toml_str("output_suffix = \"_gen.txt\"").unwrap_err();
    assert!(err.to_string().contains("must end with `.rs`"));
}

#[test]
fn prefix_must_start_an_identifier() {
    for bad in ["", "1x_", "en-code_"] {
        let text = format!("[codegen]\nfunction_prefix = \"{bad}\"");
        let err = DriverConfig::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{bad:?} accepted");
    }
    assert!(DriverConfig::from_toml_str("[codegen]\nfunction_prefix = \"_w\"").is_ok());
}

#[test]
fn discover_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(DriverConfig::discover(dir.path()).unwrap(), DriverConfig::default());

    std::fs::write(dir.path().join(CONFIG_FILE), "keep_going = true\n").unwrap();
    assert!(DriverConfig::discover(dir.path()).unwrap().keep_going);
}

#[test]
fn missing_file_names_the_path() {
    let err = DriverConfig::from_file("/definitely/not/here/jsongen.toml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here/jsongen.toml"));
}
