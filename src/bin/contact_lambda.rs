use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing_subscriber::EnvFilter;

use contact_relay::config::Config;
use contact_relay::submission::SubmissionHandler;
use contact_relay::{backends, lambda};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(Error::from)?;

    // CloudWatch stamps each line already
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let (store, mailer) = backends::connect(&config).await.map_err(Error::from)?;
    let handler = SubmissionHandler::new(store, mailer, config.notification.clone());

    lambda_runtime::run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let handler = handler.clone();
        async move { Ok::<_, Error>(lambda::handle_event(&handler, event.payload).await) }
    }))
    .await
}
