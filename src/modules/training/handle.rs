use actix_web::{post, web};

use crate::api::{error, success};
use crate::modules::training::{
    model::StartTrainingModel, schema::TrainingSession, service::TrainingService,
};
use crate::utils::ValidatedJson;

#[post("/start")]
pub async fn start_training(
    training_service: web::Data<TrainingService>,
    body: ValidatedJson<StartTrainingModel>,
) -> Result<success::Success<TrainingSession>, error::Error> {
    let session = training_service.start(body.0)?;
    Ok(success::Success::ok(Some(session)).message("Training started successfully"))
}
