use beefwatch::analyzer::{AnalysisInput, AnalysisReport, Analyzer, AnalyzerImpl};
use beefwatch::config::{load_config, AppConfig, ItemConfig, OutputFormat};
use beefwatch::model::SourceError;
use beefwatch::normalizer::filter_item;
use beefwatch::reporter;
use beefwatch::source::{PriceSource, StaticFileSource};
use futures::future::join_all;
use serde::Serialize;
use std::env;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemOutput<'a> {
    report_id: &'a str,
    section: &'a str,
    item: &'a str,
    analysis: &'a AnalysisReport,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".to_string());

    // Load configuration from file
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    let source = StaticFileSource::new(&config.data_dir);
    match source.manifest().await {
        Ok(manifest) => info!(
            "Dataset generated {} covering {} .. {} ({} reports)",
            manifest.generated_at,
            manifest.data_start_date,
            manifest.data_end_date,
            manifest.reports.len()
        ),
        Err(e) => warn!("Manifest unavailable: {}", e),
    }

    let analyzer = AnalyzerImpl::new();
    info!("Items to analyze: {}", config.items.len());

    // Process all items concurrently
    let tasks: Vec<_> = config
        .items
        .iter()
        .map(|item| process_item(item, &source, &analyzer))
        .collect();
    let results = join_all(tasks).await;

    let mut failed = 0;
    let mut outputs = Vec::new();
    for (item, result) in config.items.iter().zip(results.iter()) {
        match result {
            Ok(report) => outputs.push((item, report)),
            Err(e) => {
                failed += 1;
                warn!("Skipping {} / {}: {}", item.section, item.label(), e);
            }
        }
    }

    match config.output {
        OutputFormat::Json => {
            let payload: Vec<ItemOutput> = outputs
                .iter()
                .map(|(item, report)| ItemOutput {
                    report_id: &item.report_id,
                    section: &item.section,
                    item: item.label(),
                    analysis: report,
                })
                .collect();
            match serde_json::to_string_pretty(&payload) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to serialize reports: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        OutputFormat::Text => {
            for (item, report) in &outputs {
                println!("{}", reporter::render(item.label(), report));
            }
        }
    }

    info!("Finished: {} analyzed, {} failed", outputs.len(), failed);
    if outputs.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Loads one item's history and runs the full analysis on it.
async fn process_item(
    item: &ItemConfig,
    source: &dyn PriceSource,
    analyzer: &AnalyzerImpl,
) -> Result<AnalysisReport, SourceError> {
    info!("Processing {} / {}", item.section, item.label());
    let mut records = source.prices(&item.report_id, &item.section).await?;

    if let Some(desc) = &item.item_description {
        records = filter_item(records, desc);
    }
    info!("Loaded {} records for {}", records.len(), item.label());

    let report = analyzer.analyze(&AnalysisInput {
        records: &records,
        view_start: item.view_start,
        view_end: item.view_end,
    });

    info!(
        "{}: {:.2} | trend {:?} {:+.1}% | {:.0}th percentile | {}",
        item.label(),
        report.current_price,
        report.trend.direction,
        report.trend.change_percent,
        report.percentile.current_percentile,
        report.recommendation.label()
    );
    Ok(report)
}
