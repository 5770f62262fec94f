use super::{validate, Error};

#[test]
fn test_parameter_error_display() {
    let err = Error::param("scalar", "not canonical");
    assert_eq!(
        format!("{}", err),
        "Invalid parameter 'scalar': not canonical"
    );
}

#[test]
fn test_length_error_display() {
    let err = Error::Length {
        context: "pairing_check",
        expected: 2,
        actual: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid length for pairing_check: expected 2, got 3"
    );
}

#[test]
fn test_validate_helpers() {
    assert!(validate::parameter(true, "x", "whatever").is_ok());
    assert_eq!(
        validate::parameter(false, "x", "bad"),
        Err(Error::param("x", "bad"))
    );
    assert!(validate::length("buf", 32, 32).is_ok());
    assert!(validate::length("buf", 31, 32).is_err());
}
