use crate::infra::{InMemoryAdRepository, SeedData};
use ad_ranking::ads::{AdRankingService, RelevanceTransition, ScoreOutcome};
use ad_ranking::config::{AppConfig, StorageConfig};
use ad_ranking::error::AppError;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON seed file with `ads` and `pictures` (defaults to ADS_SEED_PATH or the built-in fixture).
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    /// Print every rule contribution behind each score.
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { seed, explain } = args;

    let storage = match seed {
        Some(path) => StorageConfig {
            seed_path: Some(path),
        },
        None => AppConfig::load()?.storage,
    };

    let repository = Arc::new(InMemoryAdRepository::from_seed(SeedData::load(&storage)?));
    let service = AdRankingService::new(repository);

    let outcomes = service.calculate_all_scores_at(Utc::now())?;
    println!("Ad ranking demo");
    println!("\nScores");
    for outcome in &outcomes {
        println!("{}", describe_outcome(outcome));
        if explain {
            for component in &outcome.components {
                println!("    {:+} {}", component.points, component.notes);
            }
        }
    }

    println!("\nQuality list");
    println!("{}", serde_json::to_string_pretty(&service.quality_listing()?)?);

    println!("\nPublic listing");
    println!("{}", serde_json::to_string_pretty(&service.public_listing()?)?);

    Ok(())
}

fn describe_outcome(outcome: &ScoreOutcome) -> String {
    let status = match (outcome.transition, outcome.irrelevant_since) {
        (RelevanceTransition::Unchanged, None) => "relevant".to_string(),
        (RelevanceTransition::Unchanged, Some(since)) => {
            format!("irrelevant since {}", since.format("%Y-%m-%d %H:%M:%S"))
        }
        (transition, _) => transition.label().to_string(),
    };
    format!("- ad {}: {} points, {}", outcome.ad_id, outcome.score, status)
}
