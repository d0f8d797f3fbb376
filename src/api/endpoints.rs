use super::{ApiClient, FetchError};
use crate::music::{Artist, Catalog, Dates, Locations, Relations};

impl ApiClient {
    // MARK: Groupie Trackers endpoints

    pub async fn artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.fetch(&self.url("/artists")).await
    }

    pub async fn locations(&self) -> Result<Locations, FetchError> {
        self.fetch(&self.url("/locations")).await
    }

    pub async fn dates(&self) -> Result<Dates, FetchError> {
        self.fetch(&self.url("/dates")).await
    }

    pub async fn relations(&self) -> Result<Relations, FetchError> {
        self.fetch(&self.url("/relation")).await
    }

    /// Fetches the four datasets one after the other and links them
    pub async fn load_catalog(&self) -> Result<Catalog, FetchError> {
        let artists = self.artists().await?;
        log::info!("fetched {} artists", artists.len());
        let locations = self.locations().await?;
        log::debug!("fetched {} location records", locations.index.len());
        let dates = self.dates().await?;
        log::debug!("fetched {} date records", dates.index.len());
        let relations = self.relations().await?;
        log::debug!("fetched {} relation records", relations.index.len());

        Ok(Catalog::link(artists, locations, dates, relations))
    }
}
