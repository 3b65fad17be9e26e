use quiet_hn::error::{LOAD_FAILED_MESSAGE, RENDER_FAILED_MESSAGE};
use quiet_hn::{QuietHnError, Result};

#[test]
fn test_error_display() {
    let err = QuietHnError::Api {
        status: 503,
        message: "unavailable".into(),
    };
    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("unavailable"));
}

#[test]
fn test_configuration_display() {
    let err = QuietHnError::Configuration("no item source configured".to_string());
    assert!(err.to_string().contains("no item source configured"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(QuietHnError::Listing)
    }
    assert!(returns_error().is_err());
}

#[test]
fn test_json_error_conversion() {
    fn parse() -> Result<Vec<u64>> {
        Ok(serde_json::from_str("not json")?)
    }
    assert!(matches!(parse(), Err(QuietHnError::Json(_))));
}

// ============================================================================
// User-facing messages
// ============================================================================

#[test]
fn render_errors_have_their_own_message() {
    assert_eq!(
        QuietHnError::Render("bad template".into()).public_message(),
        RENDER_FAILED_MESSAGE
    );
}

#[test]
fn everything_else_is_a_load_failure() {
    let errors = [
        QuietHnError::Listing,
        QuietHnError::Http("connection reset".into()),
        QuietHnError::Api {
            status: 500,
            message: "internal".into(),
        },
        QuietHnError::EmptyResponse,
        QuietHnError::InvalidInput("bad".into()),
        QuietHnError::Configuration("bad".into()),
    ];
    for err in errors {
        assert_eq!(err.public_message(), LOAD_FAILED_MESSAGE, "{err:?}");
    }
}

#[test]
fn public_messages_hide_detail() {
    let err = QuietHnError::Http("secret upstream detail".into());
    assert!(!err.public_message().contains("secret"));
}
