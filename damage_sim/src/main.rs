//! damage_sim - Replays a damage scenario and reports hit statistics
//!
//! Usage: `damage_sim [SCENARIO] [--config DAMAGE_TOML] [--json]`

mod scenario;
mod simulation;

use anyhow::{bail, Context, Result};
use damage_core::config::load_damage_config;
use damage_core::{default_resolver, CurveTable, DamageResolver};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scenario::Scenario;
use simulation::HitSimulation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct Args {
    scenario: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        scenario: None,
        config: None,
        json: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            other if other.starts_with("--") => bail!("unknown flag {}", other),
            other => args.scenario = Some(PathBuf::from(other)),
        }
    }

    Ok(args)
}

fn load_resolver(path: Option<&PathBuf>) -> Result<DamageResolver<CurveTable>> {
    match path {
        Some(path) => {
            let config = load_damage_config(path)
                .with_context(|| format!("loading damage config {}", path.display()))?;
            Ok(config.build()?)
        }
        None => Ok(default_resolver()),
    }
}

/// Filter from `RUST_LOG` directives, falling back to `info`
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let resolver = load_resolver(args.config.as_ref())?;

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::parse(include_str!("../config/scenario.toml"))?,
    };

    let spec = scenario.effect_spec()?;
    let source = scenario.source_attributes()?;
    let target = scenario.target_attributes()?;
    let mut rng = ChaCha8Rng::seed_from_u64(scenario.seed);

    tracing::info!(
        "simulating {} hits (seed {}, source lvl {}, target lvl {})",
        scenario.hits,
        scenario.seed,
        scenario.source_level,
        scenario.target_level
    );

    let result = HitSimulation::run(&resolver, &spec, &source, &target, scenario.hits, &mut rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Hits:        {}", result.hit_count);
        println!("Avg damage:  {:.2}", result.avg_damage());
        println!("Min / Max:   {:.2} / {:.2}", result.min_damage, result.max_damage);
        println!("Block rate:  {:.1}%", result.block_rate());
        println!("Crit rate:   {:.1}%", result.crit_rate());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_global_debug_is_kept() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_per_crate_debug() {
        assert_eq!(
            log_filter(Some("warn,damage_core=debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
