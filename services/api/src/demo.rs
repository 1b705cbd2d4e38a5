use crate::infra::demo_snapshot_directory;
use chrono::Local;
use clap::Args;
use healthscore::error::AppError;
use healthscore::rating::{
    ClusterId, EnterpriseHealthService, EnterpriseHealthView, HealthAssessment, HealthGaugeView,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Raw model score on the 0-100 scale
    #[arg(long)]
    pub(crate) score: f64,
    /// Published rating label (AAA, AA, A, B, C, D); unknown labels still render
    #[arg(long)]
    pub(crate) rating: String,
    /// Behavioral cluster id from the segmentation run, when known
    #[arg(long)]
    pub(crate) cluster: Option<u32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Limit the walk to one enterprise code
    #[arg(long)]
    pub(crate) code: Option<String>,
    /// Print each enterprise's JSON payload after its gauge
    #[arg(long)]
    pub(crate) include_json: bool,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        score,
        rating,
        cluster,
    } = args;

    let assessment = HealthAssessment::evaluate(score, &rating, cluster.map(ClusterId))?;
    let gauge = HealthGaugeView::new(&assessment);

    println!("Enterprise health assessment");
    println!(
        "- Score {} -> rating {} | color {}",
        gauge.score, gauge.rating, gauge.rating_color
    );
    match gauge.rating_band {
        Some(band) => println!(
            "- Band {} covers raw scores {}..={}",
            band,
            band.score_floor(),
            band.score_ceiling()
        ),
        None => println!("- Rating label is off the published scale; gauge uses the fallback color"),
    }
    println!("- Cluster profile: {}", gauge.cluster_profile);
    render_gauge_bar(&gauge);

    match serde_json::to_string_pretty(&gauge) {
        Ok(json) => println!("\nGauge payload:\n{json}"),
        Err(err) => println!("\nGauge payload unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { code, include_json } = args;
    let today = Local::now().date_naive();

    let directory = Arc::new(demo_snapshot_directory());
    let service = EnterpriseHealthService::new(directory);

    println!("Enterprise HealthScore demo (evaluated {today})");

    let codes = match code {
        Some(code) => vec![code],
        None => match service.roster() {
            Ok(codes) => codes,
            Err(err) => {
                println!("Snapshot directory unavailable: {err}");
                return Ok(());
            }
        },
    };

    for code in codes {
        match service.latest_health(&code) {
            Ok(view) => render_health_view(&view, include_json),
            Err(err) => println!("\n{code}: unavailable ({err})"),
        }
    }

    Ok(())
}

fn render_health_view(view: &EnterpriseHealthView, include_json: bool) {
    println!("\n{} ({}) - fiscal year {}", view.name, view.code, view.year);
    println!(
        "- Score {} | rating {} | color {}",
        view.gauge.score, view.gauge.rating, view.gauge.rating_color
    );
    println!("- Cluster profile: {}", view.gauge.cluster_profile);
    render_gauge_bar(&view.gauge);

    if !view.ratios.is_empty() {
        println!("- Key ratios:");
        for (kind, value) in &view.ratios {
            println!("  - {}: {:.2}", kind.label(), value);
        }
    }

    if include_json {
        match serde_json::to_string_pretty(view) {
            Ok(json) => println!("- Dashboard payload:\n{json}"),
            Err(err) => println!("- Dashboard payload unavailable: {err}"),
        }
    }
}

const GAUGE_COLUMNS: usize = 60;

fn gauge_column(pct: f64) -> usize {
    let column = (pct / 100.0 * GAUGE_COLUMNS as f64).round() as usize;
    column.min(GAUGE_COLUMNS)
}

/// Text rendering of the dashboard gauge: six labeled segments and a pointer
/// sitting at the score's remapped position.
fn render_gauge_bar(gauge: &HealthGaugeView) {
    let mut labels = vec![b' '; GAUGE_COLUMNS];
    let mut bar = vec![b'='; GAUGE_COLUMNS];

    for segment in &gauge.segments {
        let start = gauge_column(segment.start_pct);
        if start > 0 && start < GAUGE_COLUMNS {
            bar[start] = b'|';
        }
        for (offset, byte) in segment.band_label.bytes().enumerate() {
            let column = start + offset;
            if column < GAUGE_COLUMNS {
                labels[column] = byte;
            }
        }
    }

    let pointer = gauge_column(gauge.pointer_pct);

    println!("   {}", String::from_utf8_lossy(&labels));
    println!("  [{}]", String::from_utf8_lossy(&bar));
    println!("   {}^ {:.1}%", " ".repeat(pointer), gauge.pointer_pct);
}
