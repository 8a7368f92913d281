#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn inputs_and_flags_in_any_order() {
    let parsed = GenArgs::parse(&args(&[
        "--omit-empty",
        "a.json",
        "-o",
        "gen",
        "b.json",
        "--no-std-adapters",
        "-k",
    ]))
    .unwrap();
    assert_eq!(
        parsed,
        GenArgs {
            inputs: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
            output_dir: Some(PathBuf::from("gen")),
            config: None,
            omit_empty: true,
            no_std_adapters: true,
            keep_going: true,
            verbose: false,
        }
    );
}

#[test]
fn equals_forms() {
    let parsed = GenArgs::parse(&args(&["--out-dir=out", "--config=cfg.toml", "x.json"])).unwrap();
    assert_eq!(parsed.output_dir, Some(PathBuf::from("out")));
    assert_eq!(parsed.config, Some(PathBuf::from("cfg.toml")));
}

#[test]
fn missing_value_is_usage_error() {
    let err = GenArgs::parse(&args(&["x.json", "-o"])).unwrap_err();
    assert_eq!(err.to_string(), "-o requires a value");
}

#[test]
fn unknown_option_is_usage_error() {
    let err = GenArgs::parse(&args(&["x.json", "--fast"])).unwrap_err();
    assert_eq!(err.to_string(), "unknown option `--fast`");
}

#[test]
fn inputs_are_required() {
    let err = GenArgs::parse(&args(&["--omit-empty"])).unwrap_err();
    assert!(matches!(err, DriverError::Usage(_)));
}

#[test]
fn overrides_apply_on_top_of_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("jsongen.toml"),
        "output_dir = \"from_file\"\n[codegen]\nnaming = \"kebab_case\"\n",
    )
    .unwrap();

    let parsed = GenArgs::parse(&args(&["x.json", "--omit-empty", "-v"])).unwrap();
    let config = parsed.resolve_config(dir.path()).unwrap();
    assert_eq!(config.output_dir, Some(PathBuf::from("from_file")));
    assert!(config.codegen.omit_empty);
    assert_eq!(config.codegen.naming, jsongen_codegen::NamingPolicy::KebabCase);
    assert_eq!(config.log_level, "debug");

    let parsed = GenArgs::parse(&args(&["x.json", "-o", "cli"])).unwrap();
    let config = parsed.resolve_config(dir.path()).unwrap();
    assert_eq!(config.output_dir, Some(PathBuf::from("cli")));
    assert!(!config.codegen.omit_empty);
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let parsed = GenArgs::parse(&args(&["x.json", "--config", "missing.toml"])).unwrap();
    let err = parsed.resolve_config(dir.path()).unwrap_err();
    assert!(matches!(err, DriverError::Config(_)));
}
