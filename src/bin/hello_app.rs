use hello_fixtures::config::Config;
use hello_fixtures::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("hello fixture starting");

    let config = Config::from_env()?;
    config.log_startup();

    server::serve(server::hello_app(), &config).await
}
