use super::artist::{fold_case, Artist};
use super::concerts::{Dates, Locations, Relation, Relations};

/// Every artist together with its concert records. Built once at startup
/// and only read afterwards
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub artists: Vec<Artist>,

    /// Full relation index, independent of any artist filter
    pub relations: Vec<Relation>,
}

impl Catalog {
    /// Associates the i-th location, date and relation record with the i-th
    /// artist. Upstream lists are matched by position only, so the catalog
    /// is truncated to the shortest of the four
    pub fn link(
        mut artists: Vec<Artist>,
        locations: Locations,
        dates: Dates,
        relations: Relations,
    ) -> Self {
        let len = artists
            .len()
            .min(locations.index.len())
            .min(dates.index.len())
            .min(relations.index.len());
        if len != artists.len()
            || len != locations.index.len()
            || len != dates.index.len()
            || len != relations.index.len()
        {
            log::warn!(
                "upstream lists differ in length (artists {}, locations {}, dates {}, relations {}), keeping {}",
                artists.len(),
                locations.index.len(),
                dates.index.len(),
                relations.index.len(),
                len
            );
        }

        artists.truncate(len);
        let records = locations
            .index
            .into_iter()
            .zip(dates.index)
            .zip(relations.index.iter().cloned());
        for (artist, ((location, date), relation)) in artists.iter_mut().zip(records) {
            artist.locations = Some(location);
            artist.dates = Some(date);
            artist.relations = Some(relation);
        }

        Self {
            artists,
            relations: relations.index,
        }
    }

    /// Artists whose name starts with `letter`, ignoring case, in catalog order
    pub fn filter_by_prefix(&self, letter: &str) -> Vec<&Artist> {
        let prefix = fold_case(letter);
        self.artists
            .iter()
            .filter(|artist| artist.name_starts_with(&prefix))
            .collect()
    }
}

/// "A" to "Z", one letter per entry
pub fn alphabet() -> Vec<String> {
    ('A'..='Z').map(String::from).collect()
}
