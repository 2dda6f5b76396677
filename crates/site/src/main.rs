// File: crates/site/src/main.rs
// Summary: CLI for the Altiplano site: `render` writes chart + page, `scene` prints a hero frame.

mod config;
mod data;
mod nav;
mod page;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::dataset::djf_observations;
use chart_core::{PointerEvent, RenderOptions};
use clap::{Parser, Subcommand};
use hero_scene::{HeroScene, VisualizerScene};
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::page::PageContent;

/// Static site generator for the southern Andean Altiplano precipitation study.
#[derive(Parser, Debug)]
#[command(name = "altiplano-site", version, about)]
struct Cli {
    /// TOML settings file; optional.
    #[arg(long, global = true, default_value = "altiplano.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write trend.svg, index.html and optionally trend.png.
    Render {
        /// Output directory; overrides the config.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// CSV with year and value columns instead of the built-in series.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Pre-select this observation index as hovered.
        #[arg(long)]
        hover: Option<usize>,

        /// Also rasterize to PNG.
        #[arg(long)]
        png: bool,

        /// Device pixel ratio for the PNG.
        #[arg(long, default_value = "1.0")]
        scale: f32,
    },
    /// Print the hero scene transforms at a moment as JSON.
    Scene {
        /// Seconds since the scene mounted.
        #[arg(long, default_value = "0.0")]
        at: f64,

        /// Sample the impact-section visualizer instead of the hero.
        #[arg(long)]
        visualizer: bool,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let cfg = SiteConfig::load(&cli.config)?;
    match cli.command {
        Command::Render { out, data, hover, png, scale } => {
            let out_dir = out.unwrap_or_else(|| cfg.output_dir.clone());
            render(&cfg, out_dir, data, hover, png || cfg.png, scale)
        }
        Command::Scene { at, visualizer, seed } => {
            let frame = if visualizer {
                VisualizerScene::default().frame(at)?
            } else {
                HeroScene::new(seed.unwrap_or(cfg.seed))?.frame(at)?
            };
            println!("{}", serde_json::to_string_pretty(&frame)?);
            Ok(())
        }
    }
}

fn render(
    cfg: &SiteConfig,
    out_dir: PathBuf,
    data: Option<PathBuf>,
    hover: Option<usize>,
    png: bool,
    scale: f32,
) -> Result<()> {
    let (obs, builtin) = match data.or_else(|| cfg.data.clone()) {
        Some(path) => {
            let obs = data::load_observations(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            (obs, false)
        }
        None => (djf_observations(), true),
    };
    println!("Loaded {} observations ({}-{})", obs.len(), obs.start_year(), obs.end_year());

    let mut chart = cfg.build_chart(obs, builtin)?;
    if let Some(i) = hover {
        chart.handle_pointer(PointerEvent::Enter(i)).context("--hover")?;
    }

    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let opts = RenderOptions { scale, ..RenderOptions::default() };

    let svg_path = out_dir.join("trend.svg");
    chart.render_to_svg(&opts, &svg_path)?;
    println!("Wrote {}", svg_path.display());

    if png {
        let png_path = out_dir.join("trend.png");
        chart.render_to_png(&opts, &png_path)?;
        println!("Wrote {}", png_path.display());
    }

    let svg = chart.render_svg_string(&RenderOptions::default())?;
    let html = page::render_page(&PageContent::for_chart(&chart, &svg, builtin)).context("formatting page")?;
    let page_path = out_dir.join("index.html");
    std::fs::write(&page_path, html).with_context(|| format!("writing {}", page_path.display()))?;
    println!("Wrote {}", page_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_writes_all_outputs() {
        let out = PathBuf::from("target/test_out/site_render");
        render(&SiteConfig::default(), out.clone(), None, Some(5), true, 1.0).unwrap();
        let svg = std::fs::read_to_string(out.join("trend.svg")).unwrap();
        assert!(svg.contains("1986: 160mm"));
        assert!(out.join("trend.png").exists());
        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains(r#"<section id="trends""#));
        assert!(html.contains(r#"class="data""#));
    }

    #[test]
    fn fitted_trend_is_labelled_on_the_page() {
        let mut cfg = SiteConfig::default();
        cfg.chart.trend.mode = crate::config::TrendMode::LeastSquares;
        let out = PathBuf::from("target/test_out/site_fitted");
        render(&cfg, out.clone(), None, None, false, 1.0).unwrap();
        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("Trend line is a least-squares fit of the displayed series."));
        assert!(!html.contains("illustrative"));
    }

    #[test]
    fn loaded_csv_sets_page_years() {
        let dir = PathBuf::from("target/test_out/site_csv");
        std::fs::create_dir_all(&dir).unwrap();
        let csv = dir.join("series.csv");
        std::fs::write(&csv, "year,value\n2001,120\n2002,110\n2003,95\n").unwrap();
        render(&SiteConfig::default(), dir.clone(), Some(csv), None, false, 1.0).unwrap();
        let html = std::fs::read_to_string(dir.join("index.html")).unwrap();
        assert!(html.contains("2001 &#8211; 2003"));
        assert!(html.contains("Analyzing 3 years"));
    }

    #[test]
    fn out_of_range_hover_is_an_error() {
        let out = PathBuf::from("target/test_out/site_bad_hover");
        let err = render(&SiteConfig::default(), out, None, Some(99), false, 1.0).unwrap_err();
        assert!(format!("{err:#}").contains("--hover"));
    }
}
