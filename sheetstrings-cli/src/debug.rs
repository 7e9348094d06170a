use sheetstrings::{Error, Pipeline, SheetSource};

use crate::spinner;

/// Run the debug command: parse the sheet and print it as JSON, writing nothing.
pub fn run_debug_command(source: &dyn SheetSource, pipeline: &Pipeline) -> Result<(), Error> {
    let progress_bar = spinner();

    progress_bar.set_message(format!("Fetching {}...", source.location()));
    let raw = source.fetch().inspect_err(|_| {
        progress_bar.finish_with_message("❌ Error reading sheet");
    })?;

    progress_bar.set_message("Parsing sheet...");
    let generation = pipeline.render(&raw).inspect_err(|_| {
        progress_bar.finish_with_message("❌ Error parsing sheet");
    })?;

    let json = serde_json::to_string_pretty(&generation.sheet).map_err(|e| {
        progress_bar.finish_with_message("❌ Error serializing to JSON");
        Error::Io(e.into())
    })?;

    progress_bar.finish_with_message(format!(
        "✅ Parsed {} language(s)",
        generation.sheet.languages().len()
    ));
    println!("{}", json);
    Ok(())
}
