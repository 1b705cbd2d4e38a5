use crate::demo::{run_assessment, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use healthscore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Enterprise HealthScore",
    about = "Serve and demo the enterprise credit-health dashboard backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rate one (score, rating, cluster) triple and print its gauge state
    Assess(AssessArgs),
    /// Walk the bundled demo directory and render each enterprise's gauge
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args),
        Command::Demo(args) => run_demo(args),
    }
}
