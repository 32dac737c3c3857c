use super::*;

use pqcrypt_api::Error as CoreError;

#[test]
fn display_formats_carry_context() {
    let err = Error::Length {
        context: "matrix bytes",
        expected: 2,
        actual: 1,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for matrix bytes: expected 2, got 1"
    );

    let err = Error::Dimension {
        context: "matrix multiply",
        expected: (3, 4),
        actual: (2, 4),
    };
    assert!(err.to_string().contains("3x4"));
    assert!(err.to_string().contains("2x4"));
}

#[test]
fn conversion_to_core_error_preserves_kind() {
    let err: CoreError = Error::Padding { context: "separator" }.into();
    assert!(matches!(err, CoreError::DecryptionFailed { .. }));

    let err: CoreError = Error::Exhausted {
        operation: "scrambler matrix sampling",
        attempts: 100,
    }
    .into();
    assert!(matches!(err, CoreError::KeyGenerationFailed { .. }));

    let err: CoreError = Error::Length {
        context: "oaep block",
        expected: 128,
        actual: 127,
    }
    .into();
    assert_eq!(
        err,
        CoreError::InvalidLength {
            context: "oaep block",
            expected: 128,
            actual: 127
        }
    );
}

#[test]
fn param_helper_accepts_owned_and_borrowed() {
    let err = Error::param("n", "must be positive");
    assert!(err.to_string().contains("'n'"));

    let err = Error::param(alloc::format!("coeff[{}]", 3), "out of range");
    assert!(err.to_string().contains("coeff[3]"));
}
