//! Generate command - serialize the form into code.json

use crate::cli::style::Stylize;
use anstream::println;
use codejson::document::{generate_document, GeneratedDocument, Schema};
use codejson::config::Config;
use codejson::error::Result;
use codejson::import::FormFile;
use codejson::notify::Notifier;
use std::fs;
use std::path::Path;

/// Build code.json from the form file
pub fn load_document(config: &Config, form_path: &Path) -> Result<GeneratedDocument> {
    let data = FormFile::open(form_path)?.read_data()?;
    let schema = Schema::load(&config.schema_path)?;
    generate_document(data, &schema)
}

/// Run the generate command
pub fn run_generate(
    config: &Config,
    form_path: &Path,
    out: &Path,
    notifier: &dyn Notifier,
) -> Result<()> {
    let generated = load_document(config, form_path)?;
    fs::write(out, &generated.text)?;

    println!("{}", generated.text);
    println!();
    notifier.success(&format!("code.json written to {}", out.display()));
    if generated.token.is_some() {
        println!(
            "  {}",
            "An API key was found; run `codejson submit` to open a pull request.".muted()
        );
    }
    Ok(())
}
