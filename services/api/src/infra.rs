use healthscore::rating::{
    ClusterId, EnterpriseSnapshot, RatioKind, RepositoryError, SnapshotRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot directory held in memory. Records are loaded once at construction
/// and only read afterwards, so lookups need no locking.
#[derive(Default, Clone)]
pub(crate) struct InMemorySnapshotDirectory {
    records: HashMap<String, Vec<EnterpriseSnapshot>>,
}

impl InMemorySnapshotDirectory {
    pub(crate) fn with_snapshots(snapshots: Vec<EnterpriseSnapshot>) -> Self {
        let mut records: HashMap<String, Vec<EnterpriseSnapshot>> = HashMap::new();
        for snapshot in snapshots {
            records
                .entry(snapshot.code.clone())
                .or_default()
                .push(snapshot);
        }
        Self { records }
    }
}

impl SnapshotRepository for InMemorySnapshotDirectory {
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

fn demo_snapshot(
    code: &str,
    name: &str,
    year: i32,
    credit_score: f64,
    rating: &str,
    cluster: Option<u32>,
    ratios: &[(RatioKind, f64)],
) -> EnterpriseSnapshot {
    EnterpriseSnapshot {
        code: code.to_string(),
        name: name.to_string(),
        year,
        credit_score,
        rating: rating.to_string(),
        cluster: cluster.map(ClusterId),
        ratios: ratios.iter().copied().collect(),
    }
}

/// Built-in directory used by `serve` and the CLI demo. Covers the whole band
/// scale plus a withdrawn rating and a record predating the clustering run.
pub(crate) fn demo_snapshot_directory() -> InMemorySnapshotDirectory {
    InMemorySnapshotDirectory::with_snapshots(vec![
        demo_snapshot(
            "NSTL",
            "Northgate Steel JSC",
            2022,
            64.2,
            "B",
            Some(3),
            &[
                (RatioKind::QuickRatio, 0.94),
                (RatioKind::CurrentRatio, 1.38),
                (RatioKind::ReturnOnAssets, 0.051),
                (RatioKind::RevenueGrowth, 0.041),
            ],
        ),
        demo_snapshot(
            "NSTL",
            "Northgate Steel JSC",
            2023,
            71.9,
            "A",
            Some(5),
            &[
                (RatioKind::QuickRatio, 1.07),
                (RatioKind::CurrentRatio, 1.52),
                (RatioKind::ReturnOnAssets, 0.063),
                (RatioKind::RevenueGrowth, 0.087),
            ],
        ),
        demo_snapshot(
            "NSTL",
            "Northgate Steel JSC",
            2024,
            83.7,
            "AA",
            Some(4),
            &[
                (RatioKind::QuickRatio, 1.22),
                (RatioKind::CurrentRatio, 1.71),
                (RatioKind::ReturnOnAssets, 0.079),
                (RatioKind::RevenueGrowth, 0.118),
                (RatioKind::EbitMargin, 0.142),
            ],
        ),
        demo_snapshot(
            "MERID",
            "Meridian Foods Group",
            2023,
            91.2,
            "AAA",
            Some(4),
            &[
                (RatioKind::QuickRatio, 1.84),
                (RatioKind::CurrentRatio, 2.31),
                (RatioKind::ReturnOnAssets, 0.104),
                (RatioKind::TotalDebtToEquity, 0.32),
            ],
        ),
        demo_snapshot(
            "MERID",
            "Meridian Foods Group",
            2024,
            93.8,
            "AAA",
            Some(4),
            &[
                (RatioKind::QuickRatio, 1.91),
                (RatioKind::CurrentRatio, 2.40),
                (RatioKind::ReturnOnAssets, 0.112),
                (RatioKind::TotalDebtToEquity, 0.29),
                (RatioKind::DividendToOcf, 0.41),
            ],
        ),
        demo_snapshot(
            "HARB",
            "Harbor Logistics",
            2023,
            47.1,
            "C",
            Some(0),
            &[
                (RatioKind::QuickRatio, 0.61),
                (RatioKind::CurrentRatio, 0.98),
                (RatioKind::ReturnOnAssets, 0.012),
                (RatioKind::RevenueGrowth, -0.034),
            ],
        ),
        demo_snapshot(
            "HARB",
            "Harbor Logistics",
            2024,
            52.6,
            "B",
            Some(2),
            &[
                (RatioKind::QuickRatio, 0.77),
                (RatioKind::CurrentRatio, 1.12),
                (RatioKind::ReturnOnAssets, 0.028),
                (RatioKind::AssetTurnover, 1.92),
            ],
        ),
        demo_snapshot(
            "PTRX",
            "Petrox Distribution",
            2024,
            18.4,
            "D",
            Some(1),
            &[
                (RatioKind::QuickRatio, 0.22),
                (RatioKind::CurrentRatio, 0.58),
                (RatioKind::ReturnOnAssets, -0.067),
                (RatioKind::TotalDebtToEquity, 4.85),
            ],
        ),
        demo_snapshot(
            "ALTA",
            "Altair Textiles",
            2024,
            58.0,
            "WR",
            None,
            &[
                (RatioKind::QuickRatio, 0.89),
                (RatioKind::CurrentRatio, 1.25),
            ],
        ),
    ])
}
