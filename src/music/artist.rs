use serde::Deserialize;

use super::concerts::{Date, Location, Relation};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Upstream API identifier
    pub id: i64,

    /// Picture URL as served by the upstream API
    #[serde(default)]
    pub image: String,

    /// Band or artist display name
    pub name: String,

    /// Names of every member of the band
    #[serde(default)]
    pub members: Vec<String>,

    /// Year the band was created
    #[serde(default)]
    pub creation_date: i64,

    /// First album release date, kept as upstream formats it (`dd-mm-yyyy`)
    #[serde(default)]
    pub first_album: String,

    /// Concert locations, linked after fetch
    #[serde(skip)]
    pub locations: Option<Location>,

    /// Concert dates, linked after fetch
    #[serde(skip)]
    pub dates: Option<Date>,

    /// Dates grouped by location, linked after fetch
    #[serde(skip)]
    pub relations: Option<Relation>,
}

impl Artist {
    #[cfg(test)]
    pub fn new(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            ..Default::default()
        }
    }

    /// Name prefix test against an already folded prefix, see [`fold_case`].
    /// Every name starts with `""`.
    pub fn name_starts_with(&self, folded_prefix: &str) -> bool {
        fold_case(&self.name).starts_with(folded_prefix)
    }
}

/// Case folding shared by the letter filter and the letter navigation
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
