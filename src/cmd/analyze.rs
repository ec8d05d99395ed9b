use crate::reports;
use clap::Args;
use seoscore::config::AnalyzerParams;
use seoscore::error::SeoResult;
use seoscore::realtime::{RealTimeAnalyzer, RealTimeSeoOptions};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Markdown (or HTML) article.
    pub path: PathBuf,

    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub meta_description: Option<String>,

    #[command(flatten)]
    pub params: AnalyzerParams,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> SeoResult<()> {
    let analyzer = RealTimeAnalyzer::new(args.params)?;
    let content = fs::read_to_string(&args.path)?;
    info!("📂 Analyzing {}", args.path.display());

    let options = RealTimeSeoOptions {
        title: args.title,
        meta_description: args.meta_description,
        target_word_count: None,
    };
    let analysis = analyzer.analyze(&content, &args.keywords, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        reports::print_realtime_report(&analysis);
    }
    Ok(())
}
