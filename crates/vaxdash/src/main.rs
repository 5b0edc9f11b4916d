use std::io;
use std::path::PathBuf;

use clap::Parser;
use vaxdash::{
    ConsoleInput, Dashboard, Interrupt, Prompt, UnlinkedBackend, init_logging, load_parameters,
};
use vaxdash_core::ParameterSet;

#[derive(Parser, Debug)]
#[command(name = "vaxdash")]
#[command(about = "Interactive dashboard for the vaccine-awareness simulation")]
struct Args {
    /// Directory for the log file (default: ~/.vaxdash/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// YAML file with starting parameters
    #[arg(short, long)]
    params: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".vaxdash")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let params = match &args.params {
        Some(path) => load_parameters(path)?,
        None => ParameterSet::default(),
    };

    let interrupt = Interrupt::new();
    let (input, waker) = ConsoleInput::spawn(io::stdin(), interrupt.clone())?;
    ctrlc::set_handler(move || waker.interrupt())?;

    let prompt = Prompt::new(input, io::stdout().lock(), interrupt);
    let mut dashboard = Dashboard::new(params, UnlinkedBackend, prompt);
    dashboard.run()?;

    tracing::info!("Dashboard shutting down");
    Ok(())
}
