//! Financial cluster profiles keyed by the segmentation model's class id.

use super::domain::ClusterId;
use std::collections::HashMap;
use std::sync::OnceLock;

static CLUSTER_PROFILE_MAP: OnceLock<HashMap<u32, &'static str>> = OnceLock::new();

/// Shown when a record has no cluster class or one the table does not know.
pub const UNDETERMINED_PROFILE: &str = "cluster profile undetermined";

/// Describes the financial profile behind a cluster class id. Absent and
/// unknown ids both read as undetermined; this never fails.
pub fn cluster_profile(cluster: Option<ClusterId>) -> &'static str {
    cluster
        .and_then(|id| cluster_profile_map().get(&id.0).copied())
        .unwrap_or(UNDETERMINED_PROFILE)
}

fn cluster_profile_map() -> &'static HashMap<u32, &'static str> {
    CLUSTER_PROFILE_MAP.get_or_init(|| {
        const CLASS_TO_PROFILE: &[(u32, &str)] = &[
            (0, "negative growth, weak profitability"),
            (1, "loss-making, insolvent"),
            (2, "fast capital turnover, high efficiency"),
            (3, "cash-heavy, low debt, slow growth"),
            (4, "high profitability, low debt, strong liquidity"),
            (5, "high leverage, average profitability"),
        ];

        let mut map = HashMap::with_capacity(CLASS_TO_PROFILE.len());
        for (class, profile) in CLASS_TO_PROFILE {
            map.insert(*class, *profile);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn known_class_count_for_tests() -> usize {
    cluster_profile_map().len()
}
