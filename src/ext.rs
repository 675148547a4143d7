//! Extension methods for API Gateway proxy events

use crate::params::PathParameters;
use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;

/// Extensions for [`ApiGatewayProxyRequest`] payloads.
pub trait RequestExt {
    /// Return the route template variables bound for this event.
    ///
    /// The returned map is always usable: an event delivered without bound
    /// variables yields an empty map.
    fn path_parameters(&self) -> PathParameters;
}

impl RequestExt for ApiGatewayProxyRequest {
    fn path_parameters(&self) -> PathParameters {
        PathParameters::from(self.path_parameters.clone())
    }
}
