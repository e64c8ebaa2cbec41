use actix_files::{Files, NamedFile};
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod store;

use config::Config;
use store::Store;

async fn index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(config.client_dir.join("index.html"))?)
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gym_server=info,actix_web=info".into()),
        )
        .with_target(false)
        .init();
}

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing();

    let store = web::Data::new(Store::open(&config.data_dir)?);
    info!(
        bind = %config.bind,
        data_dir = %config.data_dir.display(),
        client_dir = %config.client_dir.display(),
        "gym api starting"
    );

    let bind = config.bind.clone();
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(config.clone())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .configure(api::configure)
                    .default_service(web::route().to(not_found)),
            )
            .service(Files::new("/public", config.client_dir.join("public")))
            .service(Files::new("/pkg", config.client_dir.join("pkg")))
            .default_service(web::route().to(index))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
