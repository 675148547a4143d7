//! The `GET /users/{userId}` handler

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use http::StatusCode;
use lambda_runtime::LambdaEvent;
use tracing::{debug, warn};

use crate::ext::RequestExt;
use crate::response;
use crate::store::UserStore;
use crate::Error;

/// Route template variable naming the requested user.
pub const USER_ID_PARAM: &str = "userId";

/// Handle one proxy event: resolve the `userId` template variable through
/// the store and answer with the profile serialized as JSON.
///
/// An event that reaches the function without the variable bound gets a
/// 400; a lookup miss gets a 404. Everything else is a 200.
pub async fn get_user<S>(
    store: &S,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error>
where
    S: UserStore,
{
    let (request, context) = event.into_parts();
    debug!(request_id = %context.request_id, "handling get-user event");

    let params = request.path_parameters();
    let user_id = match params.get(USER_ID_PARAM) {
        Some(user_id) => user_id,
        None => {
            warn!("event arrived without a {} path parameter", USER_ID_PARAM);
            return response::bad_request(format!("missing path parameter {}", USER_ID_PARAM));
        }
    };

    match store.lookup_user(user_id) {
        Ok(profile) => {
            debug!(user_id, "resolved user profile");
            response::json(StatusCode::OK, &profile)
        }
        Err(err) => {
            warn!(user_id, %err, "user lookup failed");
            response::not_found(err.to_string())
        }
    }
}
