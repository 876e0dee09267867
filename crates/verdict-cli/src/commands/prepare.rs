use anyhow::{Context, bail};

use verdict::{RubricTemplate, prepare_dir_merged, prepare_dir_per_file, prepare_file};

use super::PrepareArgs;

pub(crate) fn run(args: PrepareArgs) -> anyhow::Result<()> {
    let template = match &args.template {
        Some(path) => RubricTemplate::from_file(path)
            .with_context(|| format!("loading template {}", path.display()))?,
        None => RubricTemplate::default(),
    };

    let outcome = if args.input.is_file() {
        prepare_file(&args.input, &args.output, &args.field, &template)?
    } else if args.input.is_dir() {
        if args.per_file {
            prepare_dir_per_file(&args.input, &args.output, &args.field, &template)?
        } else {
            prepare_dir_merged(&args.input, &args.output, &args.field, &template)?
        }
    } else {
        bail!("input path does not exist: {}", args.input.display());
    };

    println!(
        "prepared {} records from {} file(s) into {} ({} skipped)",
        outcome.rewritten,
        outcome.files,
        args.output.display(),
        outcome.skipped
    );
    Ok(())
}
