use std::path::{Path, PathBuf};

use rigger_core::config::{GlobalConfig, ToolchainGlobalConfig};
use rigger_core::package::{FPIC, SHARED};
use rigger_core::settings::Compiler;
use rigger_ops::context::{locate_recipe, Overrides, RecipeContext};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
        .join(name)
}

fn load(name: &str, overrides: &Overrides) -> miette::Result<RecipeContext> {
    RecipeContext::load(&fixture(name), overrides, &GlobalConfig::default())
}

#[test]
fn locate_walks_up() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Rigger.toml"), "").unwrap();
    let nested = tmp.path().join("src").join("addon");
    std::fs::create_dir_all(&nested).unwrap();
    let found = locate_recipe(&nested, None).unwrap();
    assert_eq!(found, tmp.path().join("Rigger.toml"));
}

#[test]
fn locate_missing_recipe_fails() {
    let tmp = TempDir::new().unwrap();
    let err = locate_recipe(tmp.path(), None).unwrap_err();
    assert!(err.to_string().contains("Could not find Rigger.toml"), "got: {err}");
}

#[test]
fn locate_explicit_path() {
    let found = locate_recipe(Path::new("/"), Some(&fixture("cyclic.toml"))).unwrap();
    assert_eq!(found, fixture("cyclic.toml"));
    assert!(locate_recipe(Path::new("/"), Some(Path::new("/no/such/Rigger.toml"))).is_err());
}

#[test]
fn load_and_resolve_fixture() {
    let ctx = load("libtorrent-node.toml", &Overrides::default()).unwrap();
    assert_eq!(ctx.label(), "libtorrent-node v0.1.0");
    assert_eq!(ctx.raw.runtime, "node");
    assert_eq!(ctx.raw.settings.compiler, Compiler::Gcc);

    let resolved = ctx.resolve().unwrap();
    let boost = resolved.package("Boost").unwrap();
    assert_eq!(boost.get_bool(SHARED), Some(false));
    assert_eq!(boost.get_bool(FPIC), Some(true));
    assert_eq!(resolved.packages().len(), 6);
}

#[test]
fn command_line_overrides_win() {
    let overrides = Overrides {
        runtime: Some("electron".into()),
        runtime_version: Some("1.8.2".into()),
        compiler: Some(Compiler::Msvc),
    };
    let ctx = load("libtorrent-node.toml", &overrides).unwrap();
    let resolved = ctx.resolve().unwrap();
    assert_eq!(resolved.runtime_version(), "1.8.2");
    assert_eq!(resolved.settings().compiler, Compiler::Msvc);
    assert_eq!(resolved.package("Boost").unwrap().get_bool(FPIC), Some(false));
}

#[test]
fn empty_version_override_fails_resolution() {
    let overrides = Overrides {
        runtime_version: Some(String::new()),
        ..Default::default()
    };
    let ctx = load("libtorrent-node.toml", &overrides).unwrap();
    let err = ctx.resolve().unwrap_err();
    assert!(err.to_string().contains("Invalid runtime_version value"), "got: {err}");
}

#[test]
fn recipe_compiler_beats_global_config() {
    let global = GlobalConfig {
        toolchain: ToolchainGlobalConfig {
            compiler: Some(Compiler::Msvc),
        },
        ..Default::default()
    };
    let ctx =
        RecipeContext::load(&fixture("libtorrent-node.toml"), &Overrides::default(), &global).unwrap();
    assert_eq!(ctx.raw.settings.compiler, Compiler::Gcc);
}

#[test]
fn global_config_compiler_used_when_recipe_is_silent() {
    let global = GlobalConfig {
        toolchain: ToolchainGlobalConfig {
            compiler: Some(Compiler::Clang),
        },
        ..Default::default()
    };
    let ctx = RecipeContext::load(
        &fixture("missing-policy-target.toml"),
        &Overrides::default(),
        &global,
    )
    .unwrap();
    assert_eq!(ctx.raw.settings.compiler, Compiler::Gcc);

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("Rigger.toml");
    std::fs::write(
        &path,
        "[package]\nname = \"x\"\nversion = \"1.0.0\"\n\n[options]\nruntime = \"node\"\nruntime_version = \"1\"\n",
    )
    .unwrap();
    let ctx = RecipeContext::load(&path, &Overrides::default(), &global).unwrap();
    assert_eq!(ctx.raw.settings.compiler, Compiler::Clang);
}

#[test]
fn global_config_compiler_beats_os_default() {
    let global = GlobalConfig {
        toolchain: ToolchainGlobalConfig {
            compiler: Some(Compiler::Msvc),
        },
        ..Default::default()
    };
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("Rigger.toml");
    std::fs::write(
        &path,
        "[package]\nname = \"x\"\nversion = \"1.0.0\"\n\n[settings]\nos = \"Linux\"\n\n\
         [options]\nruntime = \"node\"\nruntime_version = \"1\"\n",
    )
    .unwrap();
    let ctx = RecipeContext::load(&path, &Overrides::default(), &global).unwrap();
    assert_eq!(ctx.raw.settings.os, "Linux");
    assert_eq!(ctx.raw.settings.compiler, Compiler::Msvc);
}

#[test]
fn cyclic_recipe_fails_to_load() {
    let err = load("cyclic.toml", &Overrides::default()).err().unwrap();
    assert!(err.to_string().contains("Dependency cycle"), "got: {err}");
}

#[test]
fn policy_target_missing_fails_resolution() {
    let ctx = load("missing-policy-target.toml", &Overrides::default()).unwrap();
    let err = ctx.resolve().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown package 'OpenSSL' referenced by policy static-only"
    );
}

#[test]
fn custom_policy_fixture() {
    let ctx = load("custom-policy.toml", &Overrides::default()).unwrap();
    let resolved = ctx.resolve().unwrap();
    let libpng = resolved.package("libpng").unwrap();
    assert_eq!(libpng.get_bool(FPIC), Some(true));
    assert_eq!(libpng.get_bool("deprecated_functions"), Some(false));
    let zlib = resolved.package("zlib").unwrap();
    assert_eq!(zlib.get_bool(SHARED), Some(false));
    assert_eq!(zlib.get_bool(FPIC), Some(true));
}
