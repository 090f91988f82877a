use actix_cors::Cors;

use crate::{api::error, modules::dashboard::repository_mem::DashboardMemRepository, ENV};

pub async fn connect_dashboard_store() -> Result<DashboardMemRepository, error::SystemError> {
    let repo = DashboardMemRepository::load(ENV.dashboard_data.as_deref()).await?;
    Ok(repo)
}

pub fn cors() -> Cors {
    Cors::default()
        .allowed_origin(&ENV.frontend_url)
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
