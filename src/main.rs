use dotenv::dotenv;
use garden::configuration::get_configuration;
use garden::startup::Application;
use garden::telemetry::init_telemetry;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_telemetry();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;
    info!("Garden listening on port {}", application.port());
    application.run_until_stopped().await?;
    Ok(())
}
