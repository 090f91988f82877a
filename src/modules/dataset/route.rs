use crate::modules::dataset::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/datasets").service(upload_dataset).service(list_datasets));
}
