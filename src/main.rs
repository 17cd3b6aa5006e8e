use anyhow::Result;
use app_icon_kit::{Project, logging};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "app-icon-kit")]
#[command(
    about = "Draw the app icon, export Android density icons and check the installed files",
    long_about = None
)]
struct Cli {
    /// Project root all icon paths are relative to
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// Config file (defaults to icon-kit.yaml in the project root, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the 512x512 base icon and save it as PNG and JPEG
    Compose,
    /// Resize the base icon into the Android mipmap density folders
    Export,
    /// Copy the generated icons into the Flutter assets and Android resource folders
    Install,
    /// Report which expected icon files exist (always exits 0)
    Audit,
    /// Compose, export, install and audit in one go
    All,
    /// Print the effective configuration as YAML
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let open = || Project::open(&cli.root, cli.config.as_deref());

    match cli.command {
        Commands::Compose => {
            open()?.compose()?;
        }
        Commands::Export => {
            open()?.export()?;
        }
        Commands::Install => {
            open()?.install()?;
        }
        Commands::Audit => {
            // A broken config must not turn the report into a failure
            Project::open_or_default(&cli.root, cli.config.as_deref()).audit();
        }
        Commands::All => {
            open()?.run_all()?;
        }
        Commands::ShowConfig => {
            print!("{}", open()?.config.to_yaml()?);
        }
    }

    Ok(())
}
