use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::GroupieError;

const DEFAULT_API_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 10;

#[derive(Clone, Debug)]
pub struct Settings {
    /// Groupie Trackers API root, endpoints are appended to it
    pub api_base_url: String,

    pub listen_addr: SocketAddr,

    /// Served under `/static`
    pub assets_dir: PathBuf,

    /// Per upstream request
    pub request_timeout: Duration,
}

impl Settings {
    /// Reads `Groupie.{toml,yaml,json,...}` when present, then `GROUPIE_*`
    /// environment variables
    pub fn load() -> Result<Self, GroupieError> {
        Self::from_file("Groupie")
    }

    fn from_file(name: &str) -> Result<Self, GroupieError> {
        let settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .set_default("assets_dir", DEFAULT_ASSETS_DIR)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("GROUPIE"))
            .build()?;

        let timeout_secs = u64::try_from(settings.get_int("request_timeout_secs")?)
            .map_err(|_| "request_timeout_secs must not be negative")?;
        Ok(Self {
            api_base_url: settings.get_string("api_base_url")?,
            listen_addr: settings.get_string("listen_addr")?.parse()?,
            assets_dir: settings.get_string("assets_dir")?.into(),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("Groupie");
        let settings = Settings::from_file(name.to_str().unwrap()).unwrap();

        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.listen_addr.port(), 8080);
        assert_eq!(settings.assets_dir, PathBuf::from("./assets"));
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("Groupie.toml"),
            "listen_addr = \"127.0.0.1:3000\"\nrequest_timeout_secs = 3\nassets_dir = \"/srv/assets\"\n",
        )
        .unwrap();
        let name = dir.path().join("Groupie");
        let settings = Settings::from_file(name.to_str().unwrap()).unwrap();

        assert_eq!(settings.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.assets_dir, PathBuf::from("/srv/assets"));
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("Groupie");

        std::fs::write(dir.path().join("Groupie.toml"), "listen_addr = \"nowhere\"\n").unwrap();
        assert!(Settings::from_file(name.to_str().unwrap()).is_err());

        std::fs::write(dir.path().join("Groupie.toml"), "request_timeout_secs = -1\n").unwrap();
        assert!(Settings::from_file(name.to_str().unwrap()).is_err());
    }
}
