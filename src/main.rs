use clap::{Parser, Subcommand};
use og_images::imaging::{FontSet, RasterCanvas, plan_card};
use og_images::{config, generate, output};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "og-images")]
#[command(about = "Generate Open Graph preview images for site pages")]
#[command(long_about = "\
Generate Open Graph preview images for site pages

Every [[pages]] entry in og.toml becomes one PNG card:

  ┌──────────────────────────────────────────┐
  │ ▌ Title, word-wrapped to two lines       │
  │   Subtitle on a single line              │
  │                                          │
  │ Name (note)                     site.url │
  │ Tagline                                  │
  └──────────────────────────────────────────┘

Output: <output_dir>/<slug>.png (default public/og/).

Fonts are taken from the first existing path in [fonts]; when none exists a
built-in bitmap font is used and a warning is logged. Set RUST_LOG=debug
for per-page layout details.

Run 'og-images gen-config' to generate a documented og.toml.")]
#[command(version)]
struct Cli {
    /// Config file [default: og.toml, stock defaults if it is missing]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory (overrides output_dir from the config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every configured page to PNG
    Build,
    /// Validate the config and show the planned layout without writing files
    Check,
    /// Print a stock og.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = load_config(cli.config.as_deref())?;
            let fonts = FontSet::discover(&config.fonts)?;
            let output_dir = cli
                .output
                .unwrap_or_else(|| PathBuf::from(&config.output_dir));

            println!("==> Rendering {} pages", config.pages.len());
            let cards = generate::generate::<RasterCanvas>(
                &config,
                &fonts,
                &output_dir,
                output::print_card,
            )?;
            output::print_summary(cards.len(), &output_dir);
        }
        Command::Check => {
            let path = cli
                .config
                .as_deref()
                .unwrap_or(Path::new(config::DEFAULT_CONFIG_PATH));
            println!("==> Checking {}", path.display());
            let config = load_config(cli.config.as_deref())?;
            let fonts = FontSet::discover(&config.fonts)?;
            let reports: Vec<_> = config
                .pages
                .iter()
                .map(|page| plan_card(&fonts, &config, page))
                .collect();
            output::print_check(&config, &fonts, &reports);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// An explicit `--config` must exist; the default `og.toml` may be absent.
fn load_config(explicit: Option<&Path>) -> Result<config::OgConfig, config::ConfigError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(Path::new(config::DEFAULT_CONFIG_PATH)),
    }
}
