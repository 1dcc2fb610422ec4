use rigger_core::config::{GlobalConfig, OutputFormat};
use rigger_core::settings::Compiler;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&tmp.path().join("config.toml")).unwrap();
    assert!(config.toolchain.compiler.is_none());
    assert_eq!(config.output.format, OutputFormat::Toml);
}

#[test]
fn loads_toolchain_and_output() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "[toolchain]\ncompiler = \"clang\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();
    let config = GlobalConfig::load_from(&path).unwrap();
    assert_eq!(config.toolchain.compiler, Some(Compiler::Clang));
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn malformed_file_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}

#[test]
fn unknown_key_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[toolchain]\ncompiller = \"clang\"\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("compiller"), "got: {err}");
}

#[test]
fn output_format_from_str() {
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("toml".parse::<OutputFormat>(), Ok(OutputFormat::Toml));
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Json.to_string(), "json");
}
