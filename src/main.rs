//! cellview - render a notebook's cells through the cell views

use anyhow::{bail, Result};
use clap::Parser;

use cellview::cli::CliArgs;
use cellview::config::ViewConfig;
use cellview::notebook::load_notebook;
use cellview::view::{CellView, ViewContext};

fn main() -> Result<()> {
    cellview::logging::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => ViewConfig::load_from(path),
        None => ViewConfig::load(),
    };
    let ctx = ViewContext::new(config);

    let cells = load_notebook(&args.notebook)?;
    let missing = args.out_of_range(cells.len());
    if !missing.is_empty() {
        bail!(
            "Cell index {:?} out of range, notebook has {} cells",
            missing,
            cells.len()
        );
    }

    let views: Vec<CellView> = cells
        .into_iter()
        .map(|model| CellView::new(model, &ctx))
        .collect();

    for (index, view) in views.iter().enumerate() {
        let flags = args.flags_for(index);
        let model = view.model();
        model.set_selected(flags.selected);
        model.set_marked(flags.marked);
        model.set_focused(flags.focused);
        model.set_rendered(flags.rendered);
    }

    let applied = ctx.scheduler().drain();
    tracing::debug!("Applied {} view updates", applied);

    for view in &views {
        println!("{}", view.to_html());
    }

    Ok(())
}
