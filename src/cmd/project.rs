use crate::reports;
use clap::Args;
use seoscore::config::ScoringWeights;
use seoscore::error::{SeoError, SeoResult};
use seoscore::scorer::loader::load_products_from_path;
use seoscore::scorer::{SeoFieldType, SeoScorer};
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    pub path: PathBuf,

    /// Field to rewrite, e.g. `meta_title` or `keyword_presence`.
    #[arg(short, long)]
    pub field: String,

    #[arg(short, long)]
    pub value: String,

    /// Product position in the catalog.
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    #[command(flatten)]
    pub weights: ScoringWeights,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn parse_field(name: &str) -> SeoResult<SeoFieldType> {
    SeoFieldType::from_str(name.trim()).map_err(|_| {
        let known: Vec<String> = SeoFieldType::iter().map(|f| f.to_string()).collect();
        SeoError::Validation(format!(
            "unknown field '{}' (expected one of: {})",
            name,
            known.join(", ")
        ))
    })
}

pub fn run(args: ProjectArgs, weights: ScoringWeights) -> SeoResult<()> {
    let field = parse_field(&args.field)?;
    let scorer = SeoScorer::new(weights)?;

    let products = load_products_from_path(&args.path)?;
    let product = products.get(args.index).ok_or_else(|| {
        SeoError::Validation(format!(
            "product index {} out of range ({} products in {})",
            args.index,
            products.len(),
            args.path.display()
        ))
    })?;

    let projection = scorer.project_field_change(product, field, &args.value);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        reports::print_projection(&projection);
    }
    Ok(())
}
