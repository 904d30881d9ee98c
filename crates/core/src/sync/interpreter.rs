//! Status-code interpretation for API-key service responses

use apikey_sync_domain::constants::{STATUS_GONE, STATUS_NO_CONTENT};
use apikey_sync_domain::{ApikeySyncError, RemoteState, Result, TransportResponse};

/// Map a validate response onto the key's remote state.
///
/// 204 means the key is valid, 410 means it exists but is disabled. Every
/// other status, and a missing response, means the service does not know
/// the key.
pub fn interpret_validate(
    client_id: &str,
    response: Option<&TransportResponse>,
) -> Result<RemoteState> {
    match response.map(|r| r.status) {
        Some(STATUS_NO_CONTENT) => Ok(RemoteState::Enabled),
        Some(STATUS_GONE) => Ok(RemoteState::Disabled),
        _ => Err(ApikeySyncError::NotFound(client_id.to_string())),
    }
}

/// Whether `client_id` can be carried in an `APIKEY` authorization header.
/// Control characters cannot appear in a header value.
pub fn is_sendable_apikey(client_id: &str) -> bool {
    !client_id.chars().any(char::is_control)
}

/// Reenable/invalidate calls count as failed above 204.
pub fn transition_failed(status: u16) -> bool {
    status > STATUS_NO_CONTENT
}

/// Removal is only successful with exactly 204.
pub fn remove_failed(status: u16) -> bool {
    status != STATUS_NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_means_enabled() {
        let state = interpret_validate("abc123", Some(&TransportResponse::new(204)));
        assert_eq!(state, Ok(RemoteState::Enabled));
    }

    #[test]
    fn gone_means_disabled() {
        let state = interpret_validate("abc123", Some(&TransportResponse::new(410)));
        assert_eq!(state, Ok(RemoteState::Disabled));
    }

    #[test]
    fn other_statuses_mean_not_found() {
        for status in [200, 201, 400, 401, 404, 500, 503] {
            let result = interpret_validate("abc123", Some(&TransportResponse::new(status)));
            assert_eq!(
                result,
                Err(ApikeySyncError::NotFound("abc123".into())),
                "status {status}"
            );
        }
    }

    #[test]
    fn missing_response_means_not_found() {
        assert_eq!(
            interpret_validate("abc123", None),
            Err(ApikeySyncError::NotFound("abc123".into()))
        );
    }

    #[test]
    fn control_characters_are_not_sendable() {
        assert!(is_sendable_apikey("abc123"));
        assert!(is_sendable_apikey("clïent"));
        assert!(!is_sendable_apikey("line\nbreak"));
        assert!(!is_sendable_apikey("tab\tid"));
        assert!(!is_sendable_apikey("nul\0"));
    }

    #[test]
    fn transition_threshold_is_no_content() {
        assert!(!transition_failed(200));
        assert!(!transition_failed(201));
        assert!(!transition_failed(204));
        assert!(transition_failed(205));
        assert!(transition_failed(404));
    }

    #[test]
    fn remove_requires_exactly_no_content() {
        assert!(!remove_failed(204));
        assert!(remove_failed(200));
        assert!(remove_failed(404));
    }
}
