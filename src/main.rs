use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use opensplit::config::Config;
use opensplit::routes;

fn cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header(),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> opensplit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(host = %config.host, port = config.port, "starting settlement service");

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&server_config))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
