#![warn(missing_docs)]

//! AWS Lambda function serving `GET /users/{userId}` for the photo app
//! users API.
//!
//! API Gateway invokes the function with a REST proxy event. The handler
//! extracts the `userId` template variable, resolves it through a
//! [`UserStore`], and answers with the profile serialized as JSON:
//!
//! ```json
//! {"firstName":"Sergey","lastName":"Kargopolov","id":"123"}
//! ```
//!
//! An event that arrives without the variable bound gets a 400, and a
//! lookup miss gets a 404; both carry a JSON `{"message": …}` body. Path
//! parameters the gateway serializes as `null` or omits entirely
//! deserialize to an empty map, so the handler never dereferences a
//! missing mapping.
//!
//! The store behind the handler is [`StaticUserStore`], a stand-in with
//! fixed name fields. Swapping in real persistence means implementing
//! [`UserStore`] and handing the new store to [`get_user`]; the event
//! plumbing does not change.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
//! use lambda_runtime::{run, service_fn, Error, LambdaEvent};
//! use photo_app_users_api::{get_user, StaticUserStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let store = StaticUserStore::new();
//!     let store = &store;
//!     run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| {
//!         async move { get_user(store, event).await }
//!     }))
//!     .await
//! }
//! ```

pub use lambda_runtime::Error;

pub mod ext;
pub mod handler;
pub mod params;
pub mod request;
pub mod response;
pub mod store;
pub mod user;

pub use crate::ext::RequestExt;
pub use crate::handler::{get_user, USER_ID_PARAM};
pub use crate::params::PathParameters;
pub use crate::store::{StaticUserStore, UserLookupError, UserStore};
pub use crate::user::UserProfile;
