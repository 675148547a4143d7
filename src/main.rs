use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use photo_app_users_api::{get_user, StaticUserStore};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // the module path adds nothing in a single-function log group
        .with_target(false)
        // CloudWatch stamps ingestion time on every line
        .without_time()
        .init();

    let store = StaticUserStore::new();
    let store = &store;

    run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| {
        async move { get_user(store, event).await }
    }))
    .await
}
