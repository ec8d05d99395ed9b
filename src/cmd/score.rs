use crate::reports;
use clap::Args;
use seoscore::api::{score_catalog, CatalogEntry, CatalogSummary};
use seoscore::config::ScoringWeights;
use seoscore::error::SeoResult;
use seoscore::scorer::loader::load_products_from_path;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Catalog files (JSON object, JSON array or CSV).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub weights: ScoringWeights,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub breakdown: bool,
}

#[derive(Serialize)]
struct CatalogReport<'a> {
    entries: &'a [CatalogEntry],
    summary: &'a CatalogSummary,
}

pub fn run(args: ScoreArgs, weights: ScoringWeights) -> SeoResult<()> {
    weights.validate()?;

    let mut products = Vec::new();
    for path in &args.paths {
        products.extend(load_products_from_path(path)?);
    }

    let entries = score_catalog(&products, &weights)?;
    let summary = CatalogSummary::from_entries(&entries);

    if args.json {
        let report = CatalogReport {
            entries: &entries,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n🔎 === AUDIT SEO PRODUITS === 🔎");
    for entry in &entries {
        reports::print_criteria_table(entry);
        reports::print_issue_table(&entry.result.issues);
        if args.breakdown {
            reports::print_breakdown_table(&entry.breakdown);
        }
    }
    reports::print_catalog_summary(&summary);
    Ok(())
}
