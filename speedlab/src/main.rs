use anyhow::Context;
use clap::Parser;
use export::plot::export_svg;
use gui_bridge::bridge::GuiBridge;
use log::info;
use speedcore::chat::Session;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use workflow::config::AppConfig;
use workflow::runner::Runner;

mod export;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Exponential speed model driver")]
struct Args {
    /// Run a single render cycle and print the result
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load parameters and server settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 90.0)]
    initial_speed: f64,
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    rate_percent: i32,
    #[arg(long, default_value_t = 2)]
    hours: u32,
    /// Write the speed-vs-time chart as SVG
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Ask the classroom helper a question
    #[arg(long)]
    ask: Option<String>,
    /// Serve the HTTP session bridge until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        AppConfig::load(path)?
    } else {
        AppConfig::from_args(args.initial_speed, args.rate_percent, args.hours)
    };
    let params = config.to_parameters()?;

    let runner = Runner::new();

    if args.offline {
        let report = runner.execute(&params);
        println!("{}", report.summary);
        println!("- {}", report.interpretation.sentence());
        println!(
            "Curve: {} points, speed range {:.2}..{:.2} mph",
            report.curve.len(),
            report.stats.min_speed,
            report.stats.max_speed
        );
        runner.append_report(&report, &config.report_log)?;
    }

    if let Some(path) = args.plot.as_deref() {
        let report = runner.execute(&params);
        export_svg(&report, path)?;
        println!("Plot written to {}", path.display());
    }

    if let Some(question) = args.ask.as_deref() {
        let mut session = Session::new();
        match session.ask(question) {
            Some(response) => println!("{}", response),
            None => println!("(empty question ignored)"),
        }
    }

    if args.serve {
        let bridge = GuiBridge::new(runner, params);
        let runtime = TokioBuilder::new_multi_thread()
            .enable_all()
            .build()
            .context("creating runtime for the HTTP bridge")?;
        runtime.block_on(bridge.serve(config.bind))?;
        info!("HTTP bridge stopped after {} sessions", bridge.session_count());
    }

    Ok(())
}
