use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::dashboard::{
    model::{
        ApiOverview, DashboardOverview, DetectionFeed, ModelCatalog, ResultsOverview, ThreatQuery,
        DEFAULT_THREAT_LIMIT,
    },
    repository::DashboardRepository,
    schema::{DatasetSummary, ModelResult, PipelineStep, TrainedModel},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: Arc<dyn DashboardRepository + Send + Sync>,
}

impl DashboardService {
    pub fn with_dependencies(repo: Arc<dyn DashboardRepository + Send + Sync>) -> Self {
        info!("DashboardService initialized with dependencies");
        DashboardService { repo }
    }

    pub async fn overview(&self) -> Result<DashboardOverview, error::SystemError> {
        Ok(DashboardOverview {
            kpis: self.repo.kpis().await?,
            recent_training: self.repo.recent_training().await?,
        })
    }

    pub async fn datasets(&self) -> Result<Vec<DatasetSummary>, error::SystemError> {
        self.repo.datasets().await
    }

    pub async fn pipeline(&self) -> Result<Vec<PipelineStep>, error::SystemError> {
        self.repo.pipeline().await
    }

    pub async fn results(&self) -> Result<ResultsOverview, error::SystemError> {
        Ok(ResultsOverview {
            models: self.repo.model_results().await?,
            attack_categories: self.repo.attack_categories().await?,
            confusion_matrix: self.repo.confusion_matrix().await?,
        })
    }

    pub async fn result(&self, id: u32) -> Result<ModelResult, error::SystemError> {
        self.repo
            .find_model_result(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Model result not found"))
    }

    pub async fn models(&self) -> Result<ModelCatalog, error::SystemError> {
        Ok(ModelCatalog {
            models: self.repo.trained_models().await?,
            export_formats: self.repo.export_formats().await?,
        })
    }

    pub async fn model(&self, id: &str) -> Result<TrainedModel, error::SystemError> {
        self.repo
            .find_trained_model(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Model not found"))
    }

    pub async fn detection(&self, query: ThreatQuery) -> Result<DetectionFeed, error::SystemError> {
        let limit = query.limit.unwrap_or(DEFAULT_THREAT_LIMIT);
        Ok(DetectionFeed {
            threats: self.repo.threats(query.severity, limit).await?,
            network_stats: self.repo.network_stats().await?,
        })
    }

    pub async fn api_overview(&self) -> Result<ApiOverview, error::SystemError> {
        let keys = self.repo.api_keys().await?.into_iter().map(Into::into).collect();
        Ok(ApiOverview {
            keys,
            endpoints: self.repo.api_endpoints().await?,
            usage: self.repo.usage_stats().await?,
        })
    }
}
