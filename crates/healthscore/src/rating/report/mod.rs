pub mod views;

pub use views::{EnterpriseHealthView, GaugeSegmentView, HealthGaugeView};
