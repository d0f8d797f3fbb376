use crate::music::{alphabet, Artist, Catalog};

pub mod dates;
pub mod index;
mod layout;
pub mod locations;
pub mod relations;

/// Data bag handed to every view
pub struct Page<'a> {
    pub artists: Vec<&'a Artist>,
    pub alphabet: Vec<String>,
    pub letter: &'a str,
}

impl<'a> Page<'a> {
    pub fn new(catalog: &'a Catalog, letter: &'a str) -> Self {
        Self {
            artists: catalog.filter_by_prefix(letter),
            alphabet: alphabet(),
            letter,
        }
    }
}

/// The four views, in navigation order
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    Locations,
    Dates,
    Relations,
}

impl View {
    pub const ALL: [View; 4] = [View::Index, View::Locations, View::Dates, View::Relations];

    pub fn path(self) -> &'static str {
        match self {
            View::Index => "/",
            View::Locations => "/loc",
            View::Dates => "/dates",
            View::Relations => "/rel",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Index => "Artists",
            View::Locations => "Locations",
            View::Dates => "Dates",
            View::Relations => "Relations",
        }
    }
}
