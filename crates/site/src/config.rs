// File: crates/site/src/config.rs
// Summary: Site settings: serde defaults, then an optional TOML file, then ALTIPLANO__* env vars.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::dataset::{HISTORICAL_MEAN_MM, TREND_END_MM, TREND_START_MM};
use chart_core::types::{HEIGHT, PADDING, VALUE_MARGIN, WIDTH};
use chart_core::{theme, ChartGeometryMapper, Observations, PlotArea, TrendChart, TrendSource};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "ALTIPLANO";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub output_dir: PathBuf,
    /// CSV with `year,value` columns. Built-in series when unset.
    pub data: Option<PathBuf>,
    pub png: bool,
    pub seed: u64,
    pub chart: ChartSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("target/site"),
            data: None,
            png: false,
            seed: hero_scene::DEFAULT_SEED,
            chart: ChartSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub margin: f64,
    /// Dashed reference line. Falls back to the historical mean of the built-in series,
    /// or the sample mean of loaded data.
    pub mean_reference: Option<f64>,
    pub theme: String,
    pub trend: TrendSettings,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            margin: VALUE_MARGIN,
            mean_reference: None,
            theme: "altiplano".to_string(),
            trend: TrendSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TrendMode {
    Illustrative,
    LeastSquares,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TrendSettings {
    pub mode: TrendMode,
    pub start: f64,
    pub end: f64,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self { mode: TrendMode::Illustrative, start: TREND_START_MM, end: TREND_END_MM }
    }
}

impl TrendSettings {
    pub fn source(&self) -> TrendSource {
        match self.mode {
            TrendMode::Illustrative => TrendSource::Illustrative { start: self.start, end: self.end },
            TrendMode::LeastSquares => TrendSource::LeastSquares,
        }
    }
}

impl SiteConfig {
    /// A missing file is not an error; every field has a default.
    pub fn load(path: &Path) -> Result<Self> { Self::load_with_prefix(path, ENV_PREFIX) }

    /// Like [`SiteConfig::load`], reading overrides from `<prefix>__SECTION__KEY` variables.
    pub fn load_with_prefix(path: &Path, prefix: &str) -> Result<Self> {
        let name = path.to_string_lossy();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&name).required(false))
            .add_source(
                config::Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading config '{}'", path.display()))?;
        let cfg: SiteConfig = settings.try_deserialize().context("invalid site config")?;
        tracing::debug!(?cfg, "config loaded");
        Ok(cfg)
    }

    /// Chart for `obs` with these settings. `builtin` selects the published mean as default reference.
    pub fn build_chart(&self, obs: Observations, builtin: bool) -> Result<TrendChart> {
        let c = &self.chart;
        let area = PlotArea::new(c.width, c.height, c.padding)?;
        let mean = match c.mean_reference {
            Some(v) => v,
            None if builtin => HISTORICAL_MEAN_MM,
            None => obs.values().iter().sum::<f64>() / obs.len() as f64,
        };
        let mapper = ChartGeometryMapper::with_margin(obs, area, c.margin)?;
        Ok(TrendChart::new(mapper)
            .with_mean_reference(mean)
            .with_trend(c.trend.source())
            .with_theme(theme::find(&c.theme)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::dataset::djf_observations;

    fn write(name: &str, body: &str) -> PathBuf {
        let dir = PathBuf::from("target/test_out");
        std::fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        std::fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = SiteConfig::load(Path::new("target/test_out/does-not-exist.toml")).unwrap();
        assert_eq!(cfg.chart, ChartSettings::default());
        assert_eq!(cfg.chart.trend.source(), TrendSource::Illustrative { start: 190.0, end: 135.0 });
    }

    #[test]
    fn toml_overrides_nested_fields() {
        let p = write(
            "site_partial.toml",
            "png = true\n[chart]\nwidth = 800.0\ntheme = \"dark\"\n[chart.trend]\nmode = \"least-squares\"\n",
        );
        let cfg = SiteConfig::load(&p).unwrap();
        assert!(cfg.png);
        assert_eq!(cfg.chart.width, 800.0);
        assert_eq!(cfg.chart.height, 300.0);
        assert_eq!(cfg.chart.trend.mode, TrendMode::LeastSquares);
        assert!(cfg.chart.trend.source().is_fitted());
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        // Own prefix so parallel tests reading ALTIPLANO__* are unaffected.
        let prefix = "ALTIPLANO_ENV_TEST";
        std::env::set_var("ALTIPLANO_ENV_TEST__CHART__WIDTH", "720");
        std::env::set_var("ALTIPLANO_ENV_TEST__CHART__TREND__MODE", "least-squares");
        let p = write("site_env.toml", "[chart]\nwidth = 800.0\nheight = 320.0\n");
        let cfg = SiteConfig::load_with_prefix(&p, prefix).unwrap();
        std::env::remove_var("ALTIPLANO_ENV_TEST__CHART__WIDTH");
        std::env::remove_var("ALTIPLANO_ENV_TEST__CHART__TREND__MODE");

        assert_eq!(cfg.chart.width, 720.0);
        assert_eq!(cfg.chart.height, 320.0);
        assert_eq!(cfg.chart.padding, 40.0);
        assert_eq!(cfg.chart.trend.mode, TrendMode::LeastSquares);
    }

    #[test]
    fn invalid_geometry_fails_at_chart_build() {
        let mut cfg = SiteConfig::default();
        cfg.chart.padding = 200.0;
        let err = cfg.build_chart(djf_observations(), true).err().expect("padding too large");
        assert!(err.downcast_ref::<chart_core::ChartError>().is_some());
    }

    #[test]
    fn loaded_data_defaults_to_sample_mean() {
        let obs = Observations::try_new(2000, vec![10.0, 20.0, 30.0]).unwrap();
        let chart = SiteConfig::default().build_chart(obs, false).unwrap();
        assert_eq!(chart.mean_reference, 20.0);
        let builtin = SiteConfig::default().build_chart(djf_observations(), true).unwrap();
        assert_eq!(builtin.mean_reference, 160.0);
    }
}
