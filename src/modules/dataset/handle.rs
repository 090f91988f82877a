use actix_multipart::Multipart;
use actix_web::{get, post, web};
use futures_util::TryStreamExt;

use crate::api::{error, success};
use crate::modules::dashboard::{schema::DatasetSummary, service::DashboardService};
use crate::modules::dataset::{
    model::UploadedFile, preview::UPLOADED_MESSAGE, schema::DatasetUploadResponse,
    service::DatasetService,
};

/// Upload dataset handler, expects the file in the `file` form field
#[post("/upload")]
pub async fn upload_dataset(
    mut payload: Multipart,
    service: web::Data<DatasetService>,
) -> Result<success::Success<DatasetUploadResponse>, error::Error> {
    while let Some(mut field) = payload.try_next().await.map_err(|e| {
        log::warn!("Multipart read error: {}", e);
        error::Error::bad_request("Malformed multipart body")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
            .ok_or_else(|| error::Error::bad_request("Missing filename"))?;

        // Parameters such as charset are not part of the declared type
        let declared_type =
            field.content_type().map(|m| m.essence_str().to_string()).unwrap_or_default();

        service.validate_type(&filename, &declared_type)?;

        // Read file bytes, bailing out as soon as the limit is crossed
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|e| {
            log::warn!("Upload of '{}' interrupted: {}", filename, e);
            error::Error::bad_request("Malformed multipart body")
        })? {
            service.validate_size(bytes.len() + chunk.len())?;
            bytes.extend_from_slice(&chunk);
        }

        let file = UploadedFile::new(filename, declared_type, bytes);
        let result = service.upload(file).await?;

        return Ok(success::Success::ok(Some(result)).message(UPLOADED_MESSAGE));
    }

    Err(error::Error::bad_request("No file provided"))
}

#[get("")]
pub async fn list_datasets(
    dashboard_service: web::Data<DashboardService>,
) -> Result<success::Success<Vec<DatasetSummary>>, error::Error> {
    let datasets = dashboard_service.datasets().await?;
    Ok(success::Success::ok(Some(datasets)).message("Datasets retrieved successfully"))
}
