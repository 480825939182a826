use snorlax::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("SNORLAX_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("SNORLAX_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("SNORLAX_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("SNORLAX_MISSING_VAR");
    }
    let result: String = get_env_or_default("SNORLAX_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("SNORLAX_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("SNORLAX_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("SNORLAX_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("SNORLAX_TEST_VAR_OPTION", "123");
        let result: Option<i32> = get_env_or_none("SNORLAX_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("SNORLAX_TEST_VAR_OPTION");
    }
    let missing: Option<i32> = get_env_or_none("SNORLAX_TEST_VAR_OPTION");
    assert_eq!(missing, None);
}

#[test]
fn test_get_env_flag_values() {
    let cases = [
        ("true", true),
        ("1", true),
        ("YES", true),
        ("on", true),
        ("false", false),
        ("0", false),
        ("No", false),
        ("off", false),
    ];
    for (raw, expected) in cases {
        unsafe {
            env::set_var("SNORLAX_TEST_FLAG", raw);
        }
        assert_eq!(get_env_flag("SNORLAX_TEST_FLAG", !expected), expected, "{raw}");
    }
    unsafe {
        env::remove_var("SNORLAX_TEST_FLAG");
    }
}

#[test]
fn test_get_env_flag_invalid_uses_default() {
    unsafe {
        env::set_var("SNORLAX_TEST_FLAG_INVALID", "maybe");
        assert!(get_env_flag("SNORLAX_TEST_FLAG_INVALID", true));
        assert!(!get_env_flag("SNORLAX_TEST_FLAG_INVALID", false));
        env::remove_var("SNORLAX_TEST_FLAG_INVALID");
    }
}
