use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use tracing::error;

// structs and types

/// Serverless mail relay that forwards booking inquiries, same-origin.
pub const BOOKING_ENDPOINT: &str = "/.netlify/functions/send-contact";

const SEND_FAILED: &str = "Failed to send message";

// the relay expects camelCase keys; date and time may be empty strings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub message: String,
}

// success is signaled by the transport status, not by a body field, so both
// fields here are optional and only `message` is ever surfaced to the user
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

// errors
//
// every way a submission can fail, each with the exact display string shown
// inline in the booking form.  Relay carries the message from a decoded
// non-success body (or the generic fallback when the body has none).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("Failed to send message")]
    Transport,
    #[error("Failed to read server response")]
    ReadBody,
    #[error("Invalid server response format")]
    Decode,
    #[error("{0}")]
    Relay(String),
}

// operations

/// Decode the raw response body and apply the transport status.
///
/// The body is read as text before this point so that an HTML error page
/// surfaced by the relay produces a readable message instead of a parse
/// exception; a body that is not JSON is a format error no matter what the
/// status code said.
pub fn decode_relay_response(ok: bool, body: &str) -> Result<RelayResponse, SubmitError> {
    let decoded: RelayResponse = match serde_json::from_str(body) {
        Ok(resp) => resp,
        Err(err) => {
            error!(%err, body, "mail relay returned an undecodable body");
            return Err(SubmitError::Decode);
        }
    };

    if !ok {
        return Err(SubmitError::Relay(
            decoded.message.unwrap_or_else(|| String::from(SEND_FAILED)),
        ));
    }

    Ok(decoded)
}

/// Send one booking inquiry to the mail relay.
///
/// Exactly one outbound request per call; there is no timeout and no
/// automatic retry.
pub async fn send_booking(req: &BookingRequest) -> Result<RelayResponse, SubmitError> {
    let resp = Request::post(BOOKING_ENDPOINT)
        .json(req)
        .map_err(|err| {
            error!("failed to encode booking request: {err}");
            SubmitError::Transport
        })?
        .send()
        .await
        .map_err(|err| {
            error!("booking request did not reach the mail relay: {err}");
            SubmitError::Transport
        })?;

    let ok = resp.ok();

    let body = resp.text().await.map_err(|err| {
        error!("failed to read mail relay response: {err}");
        SubmitError::ReadBody
    })?;

    decode_relay_response(ok, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_with_well_formed_body() {
        let resp = decode_relay_response(true, r#"{"success": true}"#).unwrap();
        assert_eq!(resp.success, Some(true));
        assert_eq!(resp.message, None);
    }

    #[test]
    fn failure_status_uses_payload_message() {
        let err = decode_relay_response(false, r#"{"message": "Mail relay unavailable"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Relay(String::from("Mail relay unavailable"))
        );
        assert_eq!(err.to_string(), "Mail relay unavailable");
    }

    #[test]
    fn failure_status_without_message_falls_back() {
        let err = decode_relay_response(false, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Failed to send message");
    }

    #[test]
    fn non_json_body_is_a_format_error_even_on_success_status() {
        let err = decode_relay_response(true, "<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err, SubmitError::Decode);
        assert_eq!(err.to_string(), "Invalid server response format");
    }

    #[test]
    fn non_json_body_is_a_format_error_on_failure_status() {
        let err = decode_relay_response(false, "upstream timeout").unwrap_err();
        assert_eq!(err, SubmitError::Decode);
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let req = BookingRequest {
            name: String::from("Ada"),
            event_type: String::from("sunset-winery"),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["eventType"], "sunset-winery");
        assert_eq!(json["date"], "");
    }
}
