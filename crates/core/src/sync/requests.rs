//! Request builders for the API-key service
//!
//! | Request    | Method | Path                                       | Auth                 |
//! |------------|--------|--------------------------------------------|----------------------|
//! | Validate   | POST   | `{endpoint}/validate`                      | `APIKEY {client_id}` |
//! | Reenable   | POST   | `{endpoint}/{client_id}?keycloakId={ext}`  | Basic (+ JSON type)  |
//! | Invalidate | DELETE | `{endpoint}/{client_id}`                   | Basic                |
//! | Remove     | DELETE | `{endpoint}/synchronize/{ext}`             | Basic                |

use apikey_sync_domain::constants::{
    APIKEY_SCHEME, AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, EXTERNAL_ID_QUERY_PARAM,
    JSON_CONTENT_TYPE, SYNCHRONIZE_PATH, VALIDATE_PATH,
};
use apikey_sync_domain::{
    AuthorizationHeader, OutboundRequest, RequestMethod, ServiceEndpoint, SyncRequest,
};
use urlencoding::encode;

/// Build the outbound call for any [`SyncRequest`].
pub fn build(
    request: &SyncRequest,
    endpoint: &ServiceEndpoint,
    authorization: &AuthorizationHeader,
) -> OutboundRequest {
    match request {
        SyncRequest::Validate { client_id } => validate(endpoint, client_id),
        SyncRequest::Reenable { client_id, external_id } => {
            reenable(endpoint, authorization, client_id, external_id)
        }
        SyncRequest::Invalidate { client_id } => invalidate(endpoint, authorization, client_id),
        SyncRequest::Remove { external_id } => remove(endpoint, authorization, external_id),
    }
}

/// The API key itself is the credential for validate.
pub fn validate(endpoint: &ServiceEndpoint, client_id: &str) -> OutboundRequest {
    OutboundRequest::new(RequestMethod::Post, endpoint.join(&[VALIDATE_PATH]))
        .with_header(AUTHORIZATION_HEADER, format!("{APIKEY_SCHEME}{client_id}"))
}

pub fn reenable(
    endpoint: &ServiceEndpoint,
    authorization: &AuthorizationHeader,
    client_id: &str,
    external_id: &str,
) -> OutboundRequest {
    let url = format!(
        "{}?{}={}",
        endpoint.join(&[&*encode(client_id)]),
        EXTERNAL_ID_QUERY_PARAM,
        encode(external_id)
    );

    OutboundRequest::new(RequestMethod::Post, url)
        .with_header(AUTHORIZATION_HEADER, authorization.as_str())
        .with_header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE)
}

pub fn invalidate(
    endpoint: &ServiceEndpoint,
    authorization: &AuthorizationHeader,
    client_id: &str,
) -> OutboundRequest {
    OutboundRequest::new(RequestMethod::Delete, endpoint.join(&[&*encode(client_id)]))
        .with_header(AUTHORIZATION_HEADER, authorization.as_str())
}

/// Full removal is addressed by the identity provider's id because the
/// client id no longer resolves once the client is deleted.
pub fn remove(
    endpoint: &ServiceEndpoint,
    authorization: &AuthorizationHeader,
    external_id: &str,
) -> OutboundRequest {
    OutboundRequest::new(
        RequestMethod::Delete,
        endpoint.join(&[SYNCHRONIZE_PATH, &*encode(external_id)]),
    )
    .with_header(AUTHORIZATION_HEADER, authorization.as_str())
}
