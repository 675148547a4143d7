//! API Gateway proxy event deserialization
//!
//! The gateway delivers invocations as REST API proxy events. These helpers
//! turn the raw JSON payload into a typed [`ApiGatewayProxyRequest`];
//! map-valued members the gateway emits as `null` come back as empty maps,
//! never as missing values.

use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use serde_json::error::Error as JsonError;
use std::io::Read;

/// Deserializes a proxy event from a `Read` impl providing JSON.
///
/// # Example
///
/// ```rust,no_run
/// use photo_app_users_api::request::from_reader;
/// use std::error::Error;
/// use std::fs::File;
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let event = from_reader(File::open("path/to/event.json")?)?;
///     Ok(println!("{:#?}", event))
/// }
/// ```
pub fn from_reader<R>(rdr: R) -> Result<ApiGatewayProxyRequest, JsonError>
where
    R: Read,
{
    serde_json::from_reader(rdr)
}

/// Deserializes a proxy event from a string of JSON text.
///
/// # Example
///
/// ```rust
/// use photo_app_users_api::request::from_str;
///
/// # fn main() -> Result<(), serde_json::Error> {
/// let event = from_str(
///     r#"{
///         "httpMethod": "GET",
///         "path": "/users/123",
///         "pathParameters": {"userId": "123"},
///         "requestContext": {"httpMethod": "GET", "identity": {}}
///     }"#,
/// )?;
/// assert_eq!(event.path_parameters.get("userId").map(String::as_str), Some("123"));
/// # Ok(())
/// # }
/// ```
pub fn from_str(s: &str) -> Result<ApiGatewayProxyRequest, JsonError> {
    serde_json::from_str(s)
}
