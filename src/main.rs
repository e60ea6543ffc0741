use vidshelf::{
    configuration::get_configuration,
    startup,
    telementry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = get_configuration()?;

    let subscriber = get_subscriber("vidshelf".into(), &cfg.telemetry, std::io::stdout)?;
    init_subscriber(subscriber)?;

    let result = startup::run(cfg).await;
    opentelemetry::global::shutdown_tracer_provider();
    result
}
