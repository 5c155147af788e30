use crate::reports;
use clap::Args;
use gramforge::api::{self, Resources};
use gramforge::config::RunConfig;
use gramforge::error::GfResult;
use gramforge::export;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CountArgs {
    #[command(flatten)]
    pub config: RunConfig,

    /// Text files, counted together as one document
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Rows shown in the summary tables (0 hides them)
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

pub fn run(args: CountArgs, config: &RunConfig, resources: &Resources) -> GfResult<()> {
    let lexicon = api::run_files(&args.inputs, resources, config)?;
    export::save_lexicon(&lexicon, &args.out_dir, "")?;

    if args.top > 0 {
        reports::print_gram_report(&lexicon, args.top);
        reports::print_skipgram_report(&lexicon, args.top);
    }
    Ok(())
}
