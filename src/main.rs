use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mdhtml::{Config, Theme};

#[derive(Parser)]
#[command(name = "mdhtml", version)]
#[command(about = "Convert Markdown files to styled HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with the configured extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,

    /// Colour theme, overrides the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Disable syntax highlighting of code blocks
    #[arg(long)]
    no_highlight: bool,

    /// Log progress at info level (otherwise RUST_LOG decides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(theme) = cli.theme {
        config.render.theme = theme.into();
    }
    if cli.no_highlight {
        config.render.highlight = false;
    }

    // Read input file
    let input = match fs::read(&cli.input) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let html = match mdhtml::convert_bytes(&input, &config.render) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error converting {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(&config.output.extension));

    if let Err(e) = fs::write(&output, html) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    tracing::info!(input = %cli.input.display(), output = %output.display(), "Converted");
    println!("Created {}", output.display());
}
