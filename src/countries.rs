use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::info;

/// Fields before the first name column of a country list line.
const LEADING_FIELDS: usize = 6;

/// Names found on one line, before any trimming.
///
/// The name section runs from the seventh field up to, but excluding, the
/// last one. Slash-separated alternatives become separate names and anything
/// from the first `(` onwards is dropped.
pub fn extract_names(line: &str) -> Vec<String> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    let Some(names) = fields.get(LEADING_FIELDS..fields.len().saturating_sub(1)) else {
        return Vec::new();
    };
    names
        .iter()
        .flat_map(|field| field.split('/'))
        .map(|name| match name.split_once('(') {
            Some((kept, _)) => kept.to_owned(),
            None => name.to_owned(),
        })
        .collect()
}

pub fn render_array<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("export const countries = [\n");
    for name in names {
        let name = name.as_ref().replace('"', "");
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        out.push('"');
        out.push_str(name);
        out.push_str("\",\n");
    }
    out.push_str("];");
    out
}

pub fn execute(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read country list {}", input.display()))?;
    let names: Vec<String> = content.lines().flat_map(extract_names).collect();
    info!(
        "Extracted {} country names from {}",
        names.len(),
        input.display()
    );
    fs::write(output, render_array(&names))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
