use anyhow::Context;
use api::bridge::ApiBridge;
use clap::Parser;
use generator::sample::{build_gpx_document, SampleConfig};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod api;
mod generator;
mod storage;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Sailing-telemetry analysis driver")]
struct Args {
    /// Analyze a GPX export offline and print a summary
    #[arg(long)]
    file: Option<PathBuf>,
    /// Analyze a generated synthetic export instead of a file
    #[arg(long, default_value_t = false)]
    demo: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Write the full JSON report of an offline run to this path
    #[arg(long)]
    out: Option<PathBuf>,
    /// Keep the HTTP surface alive for uploads
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };

    let runner = Runner::new(workflow_config.to_options());

    let offline_input = if let Some(path) = args.file.as_ref() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading GPX file {}", path.display()))?;
        Some((contents, path.display().to_string()))
    } else if args.demo {
        let document = build_gpx_document(&SampleConfig::default());
        Some((document, "demo.gpx".to_string()))
    } else {
        None
    };

    if let Some((contents, name)) = offline_input {
        let report = runner.execute(&contents)?;

        println!(
            "Offline run {} -> points {}, duration {}, sail changes {}, tacks/gybes {}, foils100 {}%, gain {} nm",
            name,
            report.points.len(),
            report.stats.total_duration,
            report.stats.sail_changes,
            report.stats.gybe_tack_count,
            report.stats.percent_foils100,
            report.stats.total_dist_gain,
        );

        if let Some(out) = args.out.as_ref() {
            let json = serde_json::to_string_pretty(&report)?;
            fs::write(out, json).with_context(|| format!("writing report {}", out.display()))?;
        }
    }

    if args.serve {
        let bridge = ApiBridge::new(Arc::new(runner), workflow_config.port);
        bridge.publish_status(&format!(
            "HTTP surface on port {} (Ctrl+C to stop)...",
            workflow_config.port
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
        bridge.publish_status(&format!(
            "{} analyses stored this session",
            bridge.stored_count()
        ));
    }

    Ok(())
}
