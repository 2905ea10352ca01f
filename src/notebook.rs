//! Notebook file loading (nbformat v4 JSON)
//!
//! Only what the views need is read: cell type, source, outputs and the
//! kernel language. Everything else in the file is ignored.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{CellModel, OutputItem, OutputModel};

/// Language assumed when the notebook metadata names none
pub const DEFAULT_LANGUAGE: &str = "python";

#[derive(Debug, Deserialize)]
struct NotebookFile {
    #[serde(default)]
    nbformat: Option<u32>,
    #[serde(default)]
    metadata: Metadata,
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    language_info: Option<LanguageInfo>,
    #[serde(default)]
    kernelspec: Option<KernelSpec>,
}

#[derive(Debug, Deserialize)]
struct LanguageInfo {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KernelSpec {
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: MultilineText,
    #[serde(default)]
    outputs: Vec<Value>,
}

/// nbformat stores text either as one string or as a list of lines
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MultilineText {
    Single(String),
    Lines(Vec<String>),
}

impl Default for MultilineText {
    fn default() -> Self {
        MultilineText::Single(String::new())
    }
}

impl MultilineText {
    fn into_string(self) -> String {
        match self {
            MultilineText::Single(text) => text,
            MultilineText::Lines(lines) => lines.concat(),
        }
    }
}

impl Metadata {
    fn language(&self) -> &str {
        self.language_info
            .as_ref()
            .and_then(|info| info.name.as_deref())
            .or_else(|| self.kernelspec.as_ref().and_then(|k| k.language.as_deref()))
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// Read a notebook file into cell models, in document order
pub fn load_notebook(path: &Path) -> Result<Vec<CellModel>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read notebook {}", path.display()))?;
    parse_notebook(&content).with_context(|| format!("Invalid notebook {}", path.display()))
}

/// Parse notebook JSON into cell models
pub fn parse_notebook(json: &str) -> Result<Vec<CellModel>> {
    let notebook: NotebookFile = serde_json::from_str(json).context("Malformed notebook JSON")?;

    match notebook.nbformat {
        Some(4) | None => {}
        Some(version) => bail!("Unsupported nbformat version {version}, expected 4"),
    }

    let language = notebook.metadata.language().to_string();
    let mut cells = Vec::with_capacity(notebook.cells.len());

    for (index, cell) in notebook.cells.into_iter().enumerate() {
        let source = cell.source.into_string();
        let model = match cell.cell_type.as_str() {
            "code" => {
                let items = cell.outputs.iter().filter_map(output_item).collect();
                CellModel::code_with_output(source, language.as_str(), OutputModel::from_items(items))
            }
            "markdown" => CellModel::markdown(source),
            "raw" => CellModel::raw(source),
            other => {
                tracing::warn!("Skipping cell {} with unknown type {:?}", index, other);
                continue;
            }
        };
        cells.push(model);
    }

    tracing::info!("Loaded {} cells ({})", cells.len(), language);
    Ok(cells)
}

/// Reduce one output record to its plain-text form
fn output_item(output: &Value) -> Option<OutputItem> {
    let output_type = output.get("output_type")?.as_str()?;
    let text = match output_type {
        "stream" => multiline(output.get("text")?),
        "execute_result" | "display_data" => multiline(output.get("data")?.get("text/plain")?),
        "error" => {
            let ename = output.get("ename").and_then(Value::as_str).unwrap_or("Error");
            let evalue = output.get("evalue").and_then(Value::as_str).unwrap_or("");
            format!("{ename}: {evalue}")
        }
        other => {
            tracing::debug!("Ignoring output of type {:?}", other);
            return None;
        }
    };
    Some(OutputItem::new(output_type, text))
}

fn multiline(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(lines) => lines.iter().filter_map(Value::as_str).collect(),
        _ => String::new(),
    }
}
