//! Message types for the Elm-style architecture
//!
//! Model notifications are turned into these messages before they reach a
//! view's update function.

use std::fmt;

/// One independently settable boolean attribute of a cell model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Selected,
    Marked,
    Focused,
    /// Markdown cells only
    Rendered,
}

impl Facet {
    pub const ALL: [Facet; 4] = [
        Facet::Selected,
        Facet::Marked,
        Facet::Focused,
        Facet::Rendered,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Facet::Selected => "selected",
            Facet::Marked => "marked",
            Facet::Focused => "focused",
            Facet::Rendered => "rendered",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Notification payload: which facet changed and its new value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetChange {
    pub facet: Facet,
    pub value: bool,
}

impl FacetChange {
    pub fn new(facet: Facet, value: bool) -> Self {
        Self { facet, value }
    }
}

/// Notification payload for the input sub-model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// Source text was replaced
    Text,
    /// Language mode was changed
    Mode,
}

/// Messages handled by a cell view's update function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMsg {
    /// A facet of the cell model changed
    Facet(FacetChange),
    /// The input sub-model changed
    Input(InputChange),
}

impl From<FacetChange> for CellMsg {
    fn from(change: FacetChange) -> Self {
        CellMsg::Facet(change)
    }
}

impl From<InputChange> for CellMsg {
    fn from(change: InputChange) -> Self {
        CellMsg::Input(change)
    }
}
