use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::rating::domain::{ClusterId, EnterpriseSnapshot, RatioKind};
use crate::rating::repository::{RepositoryError, SnapshotRepository};
use crate::rating::router::health_router;
use crate::rating::service::EnterpriseHealthService;

pub(super) fn snapshot(
    code: &str,
    name: &str,
    year: i32,
    credit_score: f64,
    rating: &str,
    cluster: Option<u32>,
) -> EnterpriseSnapshot {
    EnterpriseSnapshot {
        code: code.to_string(),
        name: name.to_string(),
        year,
        credit_score,
        rating: rating.to_string(),
        cluster: cluster.map(ClusterId),
        ratios: sample_ratios(),
    }
}

pub(super) fn sample_ratios() -> BTreeMap<RatioKind, f64> {
    let mut ratios = BTreeMap::new();
    ratios.insert(RatioKind::QuickRatio, 1.18);
    ratios.insert(RatioKind::CurrentRatio, 1.63);
    ratios.insert(RatioKind::ReturnOnAssets, 0.074);
    ratios.insert(RatioKind::RevenueGrowth, 0.112);
    ratios
}

/// Three enterprises: a multi-year record (latest year 2024), a single-year
/// weak one, and one whose rating never went through the clustering run.
pub(super) fn directory() -> MemoryDirectory {
    MemoryDirectory::with_records(vec![
        snapshot("NSTEEL", "Northgate Steel JSC", 2023, 71.8, "A", Some(5)),
        snapshot("NSTEEL", "Northgate Steel JSC", 2022, 68.2, "a", Some(5)),
        snapshot("NSTEEL", "Northgate Steel JSC", 2024, 77.4, "AA", Some(4)),
        snapshot("HRBRT", "Harbor Retail Group", 2024, 41.0, "C", Some(0)),
        snapshot("CLGX", "Crestline Logistics", 2023, 55.5, "b", None),
    ])
}

pub(super) fn build_service() -> Arc<EnterpriseHealthService<MemoryDirectory>> {
    Arc::new(EnterpriseHealthService::new(Arc::new(directory())))
}

pub(super) fn router_with_directory() -> axum::Router {
    health_router(build_service())
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    records: HashMap<String, Vec<EnterpriseSnapshot>>,
}

impl MemoryDirectory {
    pub(super) fn with_records(records: Vec<EnterpriseSnapshot>) -> Self {
        let mut map: HashMap<String, Vec<EnterpriseSnapshot>> = HashMap::new();
        for record in records {
            map.entry(record.code.clone()).or_default().push(record);
        }
        Self { records: map }
    }
}

impl SnapshotRepository for MemoryDirectory {
    fn history(&self, code: &str) -> Result<Vec<EnterpriseSnapshot>, RepositoryError> {
        self.records
            .get(code)
            .cloned()
            .ok_or_else(|| RepositoryError::UnknownEnterprise(code.to_string()))
    }

    fn codes(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(self.records.keys().cloned().collect())
    }
}

pub(super) struct UnavailableDirectory;

impl SnapshotRepository for UnavailableDirectory {
    fn history(&self, _code: &str) -> Result<Vec<EnterpriseSnapshot>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn codes(&self) -> Result<Vec<String>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
