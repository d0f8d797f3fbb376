mod api;
mod music;
mod settings;
mod web;
use api::ApiClient;
use settings::Settings;

/// Default error type
type GroupieError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), GroupieError> {
    pretty_env_logger::init();
    let settings = Settings::load()?;

    let api = ApiClient::new(settings.api_base_url.clone(), settings.request_timeout)?;
    let catalog = match api.load_catalog().await {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("loading artists from {}: {}", settings.api_base_url, err);
            return Err(err.into());
        }
    };
    log::info!("catalog ready with {} artists", catalog.artists.len());

    if let Err(err) = web::serve(catalog, &settings).await {
        log::error!("{}: {}", settings.listen_addr, err);
        return Err(err);
    }

    Ok(())
}
