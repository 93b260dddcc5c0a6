use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_FINDINGS);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_FINDINGS, EXIT_CONFIG_ERROR);
}

#[test]
fn load_errors_convert_into_crate_errors() {
    let err: ContentGuardError = LoadError::Empty {
        path: "metrics.json".into(),
    }
    .into();
    assert_eq!(err.error_type(), "Load");
    assert_eq!(err.to_string(), "Dataset contains no records: metrics.json");
}
