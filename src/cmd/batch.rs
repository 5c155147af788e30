use crate::reports::{self, BatchRow};
use clap::Args;
use gramforge::api::{self, Resources};
use gramforge::config::RunConfig;
use gramforge::error::{GfResult, GramForgeError};
use gramforge::export;
use std::path::PathBuf;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: RunConfig,

    /// Text files, each counted as an independent run
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Returns the number of inputs that failed. Colliding output names fail
/// the whole batch before any input is read.
pub fn run(args: BatchArgs, config: &RunConfig, resources: &Resources) -> GfResult<usize> {
    let prefixes = export::batch_prefixes(&args.inputs)?;

    println!("🧵 Counting {} inputs in parallel", args.inputs.len());

    let results = api::run_batch(&args.inputs, resources, config);

    let mut rows = Vec::with_capacity(results.len());
    let mut failures = 0;

    for ((input, result), prefix) in results.into_iter().zip(&prefixes) {
        let saved = result.and_then(|lexicon| {
            export::save_lexicon(&lexicon, &args.out_dir, prefix)?;
            Ok::<_, GramForgeError>(lexicon)
        });

        let row = match saved {
            Ok(lexicon) => BatchRow {
                input,
                tokens: lexicon.token_count,
                grams: lexicon.registry.len(),
                pairs: lexicon.skipgrams.len(),
                error: None,
            },
            Err(e) => {
                error!("❌ {}: {}", input.display(), e);
                failures += 1;
                BatchRow {
                    input,
                    tokens: 0,
                    grams: 0,
                    pairs: 0,
                    error: Some(e.to_string()),
                }
            }
        };
        rows.push(row);
    }

    reports::print_batch_report(&rows);
    Ok(failures)
}
