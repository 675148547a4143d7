//! API Gateway proxy response shaping

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;

use crate::Error;

/// Body shape for every non-200 answer this function produces.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    /// Human-readable description of what went wrong.
    pub message: String,
}

/// Build a proxy response carrying `payload` serialized as JSON text.
///
/// Members of the serialized document appear in the payload's field
/// declaration order. The single `content-type` header is mirrored into
/// `multi_value_headers`, which the gateway treats as the canonical set.
pub fn json<T>(status: StatusCode, payload: &T) -> Result<ApiGatewayProxyResponse, Error>
where
    T: Serialize,
{
    let body = serde_json::to_string(payload)?;
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(ApiGatewayProxyResponse {
        status_code: i64::from(status.as_u16()),
        headers: headers.clone(),
        multi_value_headers: headers,
        body: Some(Body::Text(body)),
        is_base64_encoded: false,
    })
}

/// 400 answer for an event that reached the function without the route's
/// template variable bound.
pub fn bad_request(message: impl Into<String>) -> Result<ApiGatewayProxyResponse, Error> {
    json(
        StatusCode::BAD_REQUEST,
        &ErrorMessage {
            message: message.into(),
        },
    )
}

/// 404 answer for a lookup that found no user.
pub fn not_found(message: impl Into<String>) -> Result<ApiGatewayProxyResponse, Error> {
    json(
        StatusCode::NOT_FOUND,
        &ErrorMessage {
            message: message.into(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{bad_request, json, not_found, Body, CONTENT_TYPE};
    use crate::user::UserProfile;
    use http::StatusCode;

    #[test]
    fn json_sets_status_and_content_type() {
        let response = json(StatusCode::OK, &serde_json::json!({"hello": "lambda"}))
            .expect("failed to build response");
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response
                .headers
                .get(CONTENT_TYPE)
                .map(|h| h.to_str().expect("invalid header")),
            Some("application/json")
        );
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn profile_body_keeps_member_order() {
        let profile = UserProfile {
            first_name: "Sergey".to_string(),
            last_name: "Kargopolov".to_string(),
            id: "123".to_string(),
        };
        let response = json(StatusCode::OK, &profile).expect("failed to build response");
        match response.body {
            Some(Body::Text(body)) => {
                assert_eq!(body, r#"{"firstName":"Sergey","lastName":"Kargopolov","id":"123"}"#)
            }
            _ => panic!("invalid body"),
        }
    }

    #[test]
    fn bad_request_shapes_error_body() {
        let response = bad_request("missing path parameter userId").expect("failed to build response");
        assert_eq!(response.status_code, 400);
        match response.body {
            Some(Body::Text(body)) => {
                assert_eq!(body, r#"{"message":"missing path parameter userId"}"#)
            }
            _ => panic!("invalid body"),
        }
    }

    #[test]
    fn not_found_shapes_error_body() {
        let response = not_found("no user found for id 42").expect("failed to build response");
        assert_eq!(response.status_code, 404);
        match response.body {
            Some(Body::Text(body)) => assert_eq!(body, r#"{"message":"no user found for id 42"}"#),
            _ => panic!("invalid body"),
        }
    }
}
