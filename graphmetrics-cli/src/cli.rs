use crate::{
    config::{
        app_config::{load_config, AppConfig, AppConfigBuilder},
        output_config::OutputFormat,
    },
    report::write_report,
};
use clap::Parser;
use config::ConfigError;
use display_error_chain::DisplayErrorChain;
use graphmetrics::{
    io::dot::{write_dot, DotOptions},
    prelude::*,
};
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "graphmetrics",
    about = "Print structural statistics of graphs stored as edge lists"
)]
pub struct Args {
    /// Edge list files, one graph per file
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// TOML file with default settings; command line arguments take precedence
    #[arg(long, env = "GRAPHMETRICS_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "GRAPHMETRICS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Worker threads for the analyzers
    #[arg(long, env = "GRAPHMETRICS_NUM_THREADS")]
    pub num_threads: Option<usize>,

    /// Print one JSON object per graph
    #[arg(long)]
    pub json: bool,

    /// Write a Graphviz description of every graph into this directory
    #[arg(long, env = "GRAPHMETRICS_DOT_DIR")]
    pub dot_dir: Option<PathBuf>,

    #[arg(long)]
    pub no_degree_distribution: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
    #[error("{failed} of {total} graphs could not be processed")]
    GraphsFailed { failed: usize, total: usize },
}

impl Args {
    /// Resolve the effective configuration: arguments >> config file >> defaults.
    pub fn app_config(&self) -> Result<AppConfig, ConfigError> {
        let base = load_config(None, self.config.clone())?;
        let mut builder = AppConfigBuilder::from(base);
        if let Some(log_level) = &self.log_level {
            builder = builder.with_log_level(log_level.clone());
        }
        if let Some(num_threads) = self.num_threads {
            builder = builder.with_num_threads(Some(num_threads));
        }
        if self.json {
            builder = builder.with_output_format(OutputFormat::Json);
        }
        if let Some(dot_dir) = &self.dot_dir {
            builder = builder.with_dot_dir(Some(dot_dir.clone()));
        }
        if self.no_degree_distribution {
            builder = builder.with_degree_distribution(false);
        }
        Ok(builder.build())
    }
}

fn graph_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn analyse(path: &Path, config: &AppConfig) -> Result<GraphSummary, GraphError> {
    let graph = load_edge_list(path)?;
    let summary = GraphSummary::compute(&graph)?;
    if let Some(dot_dir) = &config.output.dot_dir {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "graph".to_string());
        write_dot(&graph, dot_dir.join(format!("{stem}.dot")), &DotOptions::default())?;
    }
    Ok(summary)
}

/// Analyse every file in `paths`, printing reports to `out`.
///
/// A file that fails is logged and skipped; the others are still reported.
pub fn run<W: Write>(paths: &[PathBuf], config: &AppConfig, out: &mut W) -> Result<(), CliError> {
    let pool = match config.compute.num_threads {
        Some(num_threads) => Some(ThreadPoolBuilder::new().num_threads(num_threads).build()?),
        None => None,
    };

    let mut failed = 0;
    for path in paths {
        info!(path = %path.display(), "analysing graph");
        let result = match &pool {
            Some(pool) => pool.install(|| analyse(path, config)),
            None => analyse(path, config),
        };
        match result {
            Ok(summary) => write_report(out, &graph_name(path), &summary, &config.output)?,
            Err(err) => {
                error!(path = %path.display(), "{}", DisplayErrorChain::new(&err));
                failed += 1;
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        Err(CliError::GraphsFailed {
            failed,
            total: paths.len(),
        })
    } else {
        Ok(())
    }
}

pub fn cli() -> Result<(), CliError> {
    let args = Args::parse();
    let config = args.app_config()?;
    graphmetrics::logging::init_logger(config.logging.get_log_env());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args.paths, &config, &mut out)
}
