use rigger_core::option::OptionValue;
use rigger_core::package::{is_recognized_key, PackageOptions, FPIC, SHARED};

#[test]
fn set_and_get() {
    let mut opts = PackageOptions::new("Boost");
    assert!(opts.is_empty());
    assert_eq!(opts.set(SHARED, true), None);
    assert_eq!(opts.set(SHARED, false), Some(OptionValue::Bool(true)));
    assert_eq!(opts.get_bool(SHARED), Some(false));
    assert_eq!(opts.get_bool(FPIC), None);
    assert_eq!(opts.name(), "Boost");
    assert_eq!(opts.len(), 1);
}

#[test]
fn iter_is_sorted_by_key() {
    let mut opts = PackageOptions::new("zlib");
    opts.set(SHARED, false);
    opts.set(FPIC, true);
    let keys: Vec<&str> = opts.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["fPIC", "shared"]);
}

#[test]
fn recognized_keys() {
    assert!(is_recognized_key("shared"));
    assert!(is_recognized_key("fPIC"));
    assert!(is_recognized_key("deprecated_functions"));
    assert!(!is_recognized_key("fpic"));
    assert!(!is_recognized_key("with_ssl"));
}
