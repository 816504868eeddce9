//! One-off recommendations from a catalog snapshot.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use coursepath_core::{LearnerId, Recommendation, RecommendationsResponse};
use tracing::debug;

use super::load_engine;
use crate::config::ConfigLoader;

/// Arguments for the recommend command
#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Learner to recommend courses for
    pub learner: String,

    /// Catalog snapshot to read (overrides config)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Print the JSON response payload instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run the recommend command
pub async fn run(args: RecommendArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let snapshot = args.snapshot.unwrap_or(config.catalog.snapshot);
    let engine = load_engine(&snapshot, &config.engine).await?;

    let learner = LearnerId::from(args.learner);
    let recommendations = engine.recommend(&learner).await?;
    debug!("{} recommendations for {}", recommendations.len(), learner);

    if args.json {
        let response = RecommendationsResponse::success(recommendations);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("No recommendations for {}.", learner);
        return Ok(());
    }

    println!("{}", render_table(&recommendations));
    Ok(())
}

fn render_table(recommendations: &[Recommendation]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Course").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Reason").fg(Color::Cyan),
    ]);

    for rec in recommendations {
        table.add_row(vec![
            Cell::new(rec.course_id.as_str()),
            Cell::new(&rec.title),
            Cell::new(&rec.reason),
        ]);
    }

    table
}
