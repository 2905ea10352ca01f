//! Command-line argument parsing for the renderer
//!
//! Supports:
//! - Rendering every cell of a notebook file
//! - Leaving markdown cells in editing mode
//! - Selecting, marking and focusing cells by index
//! - An explicit config file

use clap::Parser;
use std::path::PathBuf;

/// Render notebook cells to HTML
#[derive(Parser, Debug)]
#[command(name = "cellview", version, about = "Render notebook cells to HTML")]
pub struct CliArgs {
    /// Notebook file (.ipynb) to render
    #[arg(value_name = "NOTEBOOK")]
    pub notebook: PathBuf,

    /// Leave markdown cells in editing mode instead of rendering them
    #[arg(short = 'e', long)]
    pub edit: bool,

    /// Mark cell N as selected (0-indexed, repeatable)
    #[arg(long = "select", value_name = "N")]
    pub selected: Vec<usize>,

    /// Mark cell N as marked (0-indexed, repeatable)
    #[arg(long = "mark", value_name = "N")]
    pub marked: Vec<usize>,

    /// Give cell N focus (0-indexed)
    #[arg(long, value_name = "N")]
    pub focus: Option<usize>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Facet values the CLI applies to one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFlags {
    pub selected: bool,
    pub marked: bool,
    pub focused: bool,
    pub rendered: bool,
}

impl CliArgs {
    /// Flags for the cell at `index`
    pub fn flags_for(&self, index: usize) -> CellFlags {
        CellFlags {
            selected: self.selected.contains(&index),
            marked: self.marked.contains(&index),
            focused: self.focus == Some(index),
            rendered: !self.edit,
        }
    }

    /// Indices that refer to no cell in a notebook of `cell_count` cells
    pub fn out_of_range(&self, cell_count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .selected
            .iter()
            .chain(&self.marked)
            .chain(&self.focus)
            .copied()
            .filter(|&i| i >= cell_count)
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["cellview", "notebook.ipynb"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_render_markdown() {
        let args = args(&[]);
        assert_eq!(args.notebook, PathBuf::from("notebook.ipynb"));
        assert_eq!(
            args.flags_for(0),
            CellFlags {
                rendered: true,
                ..CellFlags::default()
            }
        );
    }

    #[test]
    fn test_edit_flag() {
        assert!(!args(&["--edit"]).flags_for(0).rendered);
    }

    #[test]
    fn test_repeated_select_and_mark() {
        let args = args(&["--select", "1", "--select", "3", "--mark", "3", "--focus", "1"]);
        let one = args.flags_for(1);
        assert!(one.selected && one.focused && !one.marked);
        let three = args.flags_for(3);
        assert!(three.selected && three.marked && !three.focused);
        assert_eq!(args.flags_for(2), CellFlags { rendered: true, ..CellFlags::default() });
    }

    #[test]
    fn test_out_of_range() {
        let args = args(&["--select", "5", "--mark", "1", "--focus", "5"]);
        assert_eq!(args.out_of_range(3), vec![5]);
        assert!(args.out_of_range(6).is_empty());
    }

    #[test]
    fn test_notebook_required() {
        assert!(CliArgs::try_parse_from(["cellview"]).is_err());
    }
}
