use std::time::Duration;

use clap::Parser;
use r_metrics::domain::model::{AnalysisReport, FinancialInputs, LocationQuery};
use r_metrics::domain::ports::{AnalysisConfig, ReportSink};
use r_metrics::utils::error::ErrorSeverity;
use r_metrics::utils::format::format_won;
use r_metrics::utils::{logger, validation::Validate};
use r_metrics::{AnalysisEngine, CliConfig, LocalReportSink, RankingDataset, StaticRankingSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting r-metrics CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Some(email) = &config.notify_email {
        // Already validated; the demo only acknowledges, nothing is stored.
        tracing::info!("📬 Launch notification registered for {}", email);
        println!("📬 Launch notification registered for {}", email);
    }

    let dataset = match config.dataset_path() {
        Some(path) => match RankingDataset::from_file(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!(
                    "❌ Failed to load ranking dataset: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
                std::process::exit(exit_code_for(&e));
            }
        },
        None => RankingDataset::default(),
    };

    let query = LocationQuery {
        address: config.address.clone(),
        radius_m: config.radius_m(),
    };
    let financials = FinancialInputs {
        capital: config.capital,
        rent: config.rent,
        area_pyeong: config.area,
        r_score: config.r_score,
    };

    let source = StaticRankingSource::new(dataset);
    let engine = AnalysisEngine::new(source)
        .with_simulated_delay(Duration::from_secs(config.simulated_delay_secs()));

    match engine.run(&query, &financials).await {
        Ok(report) => {
            print_report(&report);

            if let Some(output_path) = config.output_path() {
                let sink = LocalReportSink::new(output_path.to_string());
                let written = sink.write_report("analysis_report.json", &report).await?;
                tracing::info!("📁 Report saved to: {}", written);
                println!("📁 Report saved to: {}", written);
            }

            tracing::info!("✅ Analysis completed successfully!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = exit_code_for(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn exit_code_for(e: &r_metrics::RMetricsError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn print_report(report: &AnalysisReport) {
    println!();
    println!("📊 Analysis report for '{}' (radius {}m)", report.query.address, report.query.radius_m);
    println!();
    println!("🏆 Top business types by R-Score:");
    for entry in &report.ranking {
        println!(
            "  #{} {} (R-Score: {}): {}",
            entry.rank, entry.name, entry.score, entry.reason
        );
    }
    println!();
    println!(
        "💰 Estimated monthly net profit: {} ~ {} won",
        format_won(report.profit.lower_bound),
        format_won(report.profit.upper_bound)
    );
}
