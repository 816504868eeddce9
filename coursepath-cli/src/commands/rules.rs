//! List the active recommendation rules.

use anyhow::Result;
use coursepath_core::RuleSet;

use crate::config::ConfigLoader;

pub fn run() -> Result<()> {
    let config = ConfigLoader::load()?;
    let rules = RuleSet::standard(&config.engine);

    for (i, name) in rules.names().iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    println!();
    println!(
        "weak score threshold: {}  beginner ratio threshold: {}",
        config.engine.weak_score_threshold, config.engine.beginner_ratio_threshold
    );
    Ok(())
}
