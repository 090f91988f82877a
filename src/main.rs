use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::{connect_dashboard_store, cors},
    modules::{
        dashboard::service::DashboardService,
        dataset::{model::UploadConfig, service::DatasetService},
        training::service::TrainingService,
    },
};

mod api;
mod configs;
mod constants;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let dashboard_repo = connect_dashboard_store().await.map_err(|e| {
        log::error!("Failed to load dashboard data: {}", e);
        std::io::Error::other("Dashboard data error")
    })?;

    let dashboard_service = DashboardService::with_dependencies(Arc::new(dashboard_repo));
    let dataset_service = DatasetService::new(UploadConfig::from_env());
    let training_service = TrainingService::new();

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors())
            .app_data(web::Data::new(dashboard_service.clone()))
            .app_data(web::Data::new(dataset_service.clone()))
            .app_data(web::Data::new(training_service.clone()))
            .service(health_check)
            .service(
                web::scope("/api")
                    .configure(modules::dataset::route::configure)
                    .configure(modules::training::route::configure)
                    .configure(modules::dashboard::route::configure),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(ENV.workers)
    .run()
    .await
}
