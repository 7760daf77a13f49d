//! Response interpretation
//!
//! Every call resolves to an [`ApiResponse`]: a success/error flag plus the
//! raw body (or the transport error message). Callers that need more than
//! the flag parse `data` themselves.
//!
//! A body counts as success when either
//! - it is JSON whose top-level `success` member is truthy, or
//! - it is the registrar's XML envelope `<ApiResponse Status="OK">`.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Simplified result of a registrar call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Success or error
    pub status: ApiStatus,
    /// Raw response body, or the transport error message
    pub data: String,
}

impl ApiResponse {
    /// Interpret a response body
    pub fn from_body(body: impl Into<String>) -> Self {
        let data = body.into();
        let status = if body_indicates_success(&data) {
            ApiStatus::Success
        } else {
            ApiStatus::Error
        };
        Self { status, data }
    }

    /// Wrap a transport failure
    pub fn transport_error(err: &crate::Error) -> Self {
        Self {
            status: ApiStatus::Error,
            data: err.to_string(),
        }
    }

    /// Whether the call succeeded
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }
}

fn body_indicates_success(body: &str) -> bool {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json.get("success").is_some_and(is_truthy),
        Err(_) => xml_status_ok(body).unwrap_or(false),
    }
}

/// Loose truthiness: empty, zero, `"0"` and null are false
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// `Some(ok)` if the body is an `ApiResponse` envelope, `None` otherwise
fn xml_status_ok(body: &str) -> Option<bool> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                // Only the root element is considered
                if e.name().as_ref() != b"ApiResponse" {
                    return None;
                }
                for attr in e.attributes().flatten() {
                    if attr.key.as_ref() == b"Status" {
                        let status = attr.unescape_value().ok()?;
                        return Some(status.eq_ignore_ascii_case("OK"));
                    }
                }
                return Some(false);
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(Event::Text(_)) => return None,
            // Declaration, comments, processing instructions
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_success_flag() {
        assert!(ApiResponse::from_body(r#"{"success":true}"#).is_success());
        assert!(ApiResponse::from_body(r#"{"success":1,"id":7}"#).is_success());
        assert!(ApiResponse::from_body(r#"{"success":"yes"}"#).is_success());

        for body in [
            r#"{"success":false}"#,
            r#"{"success":0}"#,
            r#"{"success":"0"}"#,
            r#"{"success":""}"#,
            r#"{"success":null}"#,
            r#"{"ok":true}"#,
            r#"[1,2,3]"#,
            r#"true"#,
        ] {
            let resp = ApiResponse::from_body(body);
            assert_eq!(resp.status, ApiStatus::Error, "{}", body);
            assert_eq!(resp.data, body);
        }
    }

    #[test]
    fn test_xml_envelope() {
        let ok = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <CommandResponse Type="namecheap.domains.dns.setHosts">
    <DomainDNSSetHostsResult Domain="example.com" IsSuccess="true" />
  </CommandResponse>
</ApiResponse>"#;
        assert!(ApiResponse::from_body(ok).is_success());

        let failed = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors><Error Number="1011102">Parameter APIKey is missing</Error></Errors>
</ApiResponse>"#;
        let resp = ApiResponse::from_body(failed);
        assert_eq!(resp.status, ApiStatus::Error);
        assert_eq!(resp.data, failed);
    }

    #[test]
    fn test_unparseable_body_is_error() {
        for body in ["", "<html><body>502</body></html>", "not json", "<ApiResponse"] {
            let resp = ApiResponse::from_body(body);
            assert_eq!(resp.status, ApiStatus::Error, "{:?}", body);
            assert_eq!(resp.data, body);
        }
    }

    #[test]
    fn test_transport_error() {
        let resp = ApiResponse::transport_error(&crate::Error::transport("timed out"));
        assert_eq!(resp.status, ApiStatus::Error);
        assert_eq!(resp.data, "Transport error: timed out");
    }

    #[test]
    fn test_serialized_shape() {
        let resp = ApiResponse::from_body(r#"{"success":true}"#);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"], r#"{"success":true}"#);
    }
}
