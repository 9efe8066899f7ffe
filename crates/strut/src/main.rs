use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use strut_core::kernel::bootstrap::Application;
use strut_core::kernel::error::{Error, Result};

/// Strut: a plugin-based application framework
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Application root directory
    #[arg(long, default_value = ".")]
    app_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the raw structure snapshot for the application, or for one
    /// plugin, as JSON
    Structure {
        /// Restrict to a single plugin by name
        plugin: Option<String>,
    },
    /// Resolve the whole application and print the ordered load plan
    Plan,
    /// Run the boot sequence
    Start,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let app = Application::new(&args.app_dir);

    let result = match args.command {
        Commands::Structure { plugin } => print_structure(&app, plugin.as_deref()).await,
        Commands::Plan => print_plan(&app).await,
        Commands::Start => start(&app).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn print_structure(app: &Application, plugin: Option<&str>) -> Result<()> {
    let info = app.structure_info(plugin).await?;
    let json = serde_json::to_string_pretty(&info)
        .map_err(|e| Error::Other(format!("Failed to render structure info: {}", e)))?;
    println!("{}", json);
    Ok(())
}

async fn print_plan(app: &Application) -> Result<()> {
    let report = app.boot().await?;
    for path in &report.load_order {
        println!("{}", path.display());
    }
    Ok(())
}

async fn start(app: &Application) -> Result<()> {
    let report = app.boot().await?;
    println!(
        "Booted {} with {} load actions ({} spec entries not found)",
        app.app_dir().display(),
        report.load_order.len(),
        report.not_found.len()
    );
    Ok(())
}
