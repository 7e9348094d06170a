use sheetstrings::{Error, FileSystemSink, MemorySink, Pipeline, SheetSource};

use crate::spinner;

/// Run the generate command: render every document and write it, or with
/// `dry_run` only list the paths that would be written.
pub fn run_generate_command(
    source: &dyn SheetSource,
    pipeline: &Pipeline,
    dry_run: bool,
) -> Result<(), Error> {
    let progress_bar = spinner();
    progress_bar.set_message(format!("Generating from {}...", source.location()));

    let report = if dry_run {
        pipeline.run(source, &mut MemorySink::new())
    } else {
        pipeline.run(source, &mut FileSystemSink::new())
    }
    .inspect_err(|_| {
        progress_bar.finish_with_message("❌ Generation failed");
    })?;

    let verb = if dry_run { "Would write" } else { "Wrote" };
    let warnings = match report.warnings.len() {
        0 => String::new(),
        n => format!(", {} warning(s)", n),
    };
    progress_bar.finish_with_message(format!(
        "✅ {} {} file(s) for {} language(s){}",
        verb,
        report.documents.len(),
        report.languages.len(),
        warnings
    ));

    for path in &report.documents {
        println!("{}", path.display());
    }
    Ok(())
}
