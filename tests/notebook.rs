//! Loading notebooks from disk and rendering them end to end

mod common;

use cellview::model::CellType;
use cellview::notebook::load_notebook;
use cellview::view::{CellView, Slot};
use common::harness;

const NOTEBOOK: &str = r##"{
  "nbformat": 4,
  "nbformat_minor": 5,
  "metadata": {
    "kernelspec": {"name": "python3", "language": "python"},
    "language_info": {"name": "python"}
  },
  "cells": [
    {
      "cell_type": "markdown",
      "metadata": {},
      "source": ["# Energy\n", "\n", "Energy: $E=mc^2$ rules."]
    },
    {
      "cell_type": "code",
      "execution_count": 1,
      "metadata": {},
      "source": "print(2 ** 10)",
      "outputs": [
        {"output_type": "stream", "name": "stdout", "text": ["1024\n"]},
        {"output_type": "execute_result", "execution_count": 1,
         "data": {"text/plain": ["42"], "text/html": ["<b>42</b>"]}, "metadata": {}},
        {"output_type": "display_data", "data": {"image/png": "AAAA"}, "metadata": {}}
      ]
    },
    {
      "cell_type": "raw",
      "metadata": {},
      "source": "\\LaTeX"
    }
  ]
}"##;

fn write_notebook(content: &str) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new().suffix(".ipynb").tempfile().unwrap();
    std::fs::write(file.path(), content).unwrap();
    file
}

#[test]
fn test_load_cells_in_order() {
    let file = write_notebook(NOTEBOOK);
    let cells = load_notebook(file.path()).unwrap();

    let types: Vec<CellType> = cells.iter().map(|c| c.cell_type()).collect();
    assert_eq!(types, vec![CellType::Markdown, CellType::Code, CellType::Raw]);
    assert_eq!(cells[0].input().text(), "# Energy\n\nEnergy: $E=mc^2$ rules.");
    assert_eq!(cells[1].input().mode(), "python");
    assert_eq!(cells[2].input().text(), "\\LaTeX");
}

#[test]
fn test_outputs_reduced_to_text() {
    let file = write_notebook(NOTEBOOK);
    let cells = load_notebook(file.path()).unwrap();

    let items = cells[1].output().map(|o| o.items()).unwrap_or_default();
    assert_eq!(items.len(), 2, "image-only output is skipped");
    assert_eq!(items[0].output_type, "stream");
    assert_eq!(items[0].text, "1024\n");
    assert_eq!(items[1].output_type, "execute_result");
    assert_eq!(items[1].text, "42");
}

#[test]
fn test_render_loaded_notebook() {
    let file = write_notebook(NOTEBOOK);
    let cells = load_notebook(file.path()).unwrap();
    let h = harness();

    let views: Vec<CellView> = cells
        .into_iter()
        .map(|model| CellView::new(model, &h.ctx))
        .collect();
    for view in &views {
        view.model().set_rendered(true);
    }
    assert_eq!(h.drain(), 3);

    assert_eq!(views[0].layout(), vec![Slot::Rendered]);
    let html = views[0].to_html();
    assert!(html.contains("<h1>Energy</h1>"), "{html}");
    assert!(html.contains("$E=mc^2$"));
    assert!(views[1].to_html().contains(">1024\n</pre>"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_notebook(&dir.path().join("missing.ipynb")).unwrap_err();
    assert!(format!("{err:#}").contains("missing.ipynb"));
}

#[test]
fn test_malformed_json_is_error() {
    let file = write_notebook("{ not json");
    assert!(load_notebook(file.path()).is_err());
}
