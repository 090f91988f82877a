use actix_web::{get, web};

use crate::api::{error, success};
use crate::modules::dashboard::{model, schema, service::DashboardService};
use crate::utils::ValidatedQuery;

#[get("")]
pub async fn get_overview(
    dashboard_service: web::Data<DashboardService>,
) -> Result<success::Success<model::DashboardOverview>, error::Error> {
    let overview = dashboard_service.overview().await?;
    Ok(success::Success::ok(Some(overview)).message("Dashboard retrieved successfully"))
}

#[get("/pipeline")]
pub async fn get_pipeline(
    dashboard_service: web::Data<DashboardService>,
) -> Result<success::Success<Vec<schema::PipelineStep>>, error::Error> {
    let steps = dashboard_service.pipeline().await?;
    Ok(success::Success::ok(Some(steps)).message("Pipeline retrieved successfully"))
}

#[get("")]
pub async fn get_results(
    dashboard_service: web::Data<DashboardService>,
) -> Result<success::Success<model::ResultsOverview>, error::Error> {
    let results = dashboard_service.results().await?;
    Ok(success::Success::ok(Some(results)).message("Results retrieved successfully"))
}

#[get("/{id:[0-9]+}")]
pub async fn get_result(
    dashboard_service: web::Data<DashboardService>,
    id: web::Path<u32>,
) -> Result<success::Success<schema::ModelResult>, error::Error> {
    let result = dashboard_service.result(id.into_inner()).await?;
    Ok(success::Success::ok(Some(result)).message("Result retrieved successfully"))
}

#[get("")]
pub async fn get_models(
    dashboard_service: web::Data<DashboardService>,
) -> Result<success::Success<model::ModelCatalog>, error::Error> {
    let catalog = dashboard_service.models().await?;
    Ok(success::Success::ok(Some(catalog)).message("Models retrieved successfully"))
}

#[get("/{id}")]
pub async fn get_model(
    dashboard_service: web::Data<DashboardService>,
    id: web::Path<String>,
) -> Result<success::Success<schema::TrainedModel>, error::Error> {
    let model = dashboard_service.model(&id).await?;
    Ok(success::Success::ok(Some(model)).message("Model retrieved successfully"))
}

#[get("/threats")]
pub async fn get_threats(
    dashboard_service: web::Data<DashboardService>,
    query: ValidatedQuery<model::ThreatQuery>,
) -> Result<success::Success<model::DetectionFeed>, error::Error> {
    let feed = dashboard_service.detection(query.0).await?;
    Ok(success::Success::ok(Some(feed)).message("Threats retrieved successfully"))
}

#[get("")]
pub async fn get_api_overview(
    dashboard_service: web::Data<DashboardService>,
) -> Result<success::Success<model::ApiOverview>, error::Error> {
    let overview = dashboard_service.api_overview().await?;
    Ok(success::Success::ok(Some(overview)).message("API keys retrieved successfully"))
}
