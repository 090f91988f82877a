use crate::modules::dashboard::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/dashboard").service(get_overview))
        .service(scope("/preprocessing").service(get_pipeline))
        .service(scope("/results").service(get_results).service(get_result))
        .service(scope("/models").service(get_models).service(get_model))
        .service(scope("/detection").service(get_threats))
        .service(scope("/keys").service(get_api_overview));
}
