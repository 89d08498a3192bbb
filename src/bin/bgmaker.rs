use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "bgmaker", version, about = "Render gradient backgrounds with optional patterns")]
struct Cli {
    /// Log render and export details.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a configuration and export it as bg-<w>x<h>.<ext>.
    Render(RenderArgs),
    /// Print the default configuration as JSON.
    Defaults,
    /// List the control keys accepted by --set.
    Controls,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Configuration JSON (missing fields take defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Form-style control input, applied in order after the config file (e.g. pattern=bubbles).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Directory to write the image into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Reject out-of-range values instead of clamping them.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpeg,
}

impl From<FormatChoice> for bgmaker::ExportFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Png => Self::Png,
            FormatChoice::Jpeg => Self::Jpeg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Defaults => {
            println!("{}", bgmaker::Configuration::default().to_json_pretty()?);
            Ok(())
        }
        Command::Controls => {
            for key in bgmaker::CONTROL_KEYS {
                println!("{key}");
            }
            Ok(())
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<bgmaker::Configuration> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config '{}'", path.display()))?;
    bgmaker::Configuration::from_json(&text)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => bgmaker::Configuration::default(),
    };

    for raw in &args.set {
        let assignment = bgmaker::ControlAssignment::parse(raw)
            .with_context(|| format!("--set '{raw}'"))?;
        assignment
            .apply(&mut config)
            .with_context(|| format!("--set '{raw}'"))?;
    }

    if args.strict {
        config.validate().context("strict validation")?;
    }

    let session = bgmaker::Session::new(config).context("render")?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let path = session
        .export_to_dir(args.format.into(), &args.out_dir)
        .context("export")?;

    eprintln!("wrote {}", path.display());
    Ok(())
}
