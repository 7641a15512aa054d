use std::path::PathBuf;

pub const DEFAULT_FLAG_TTL_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct VitrinaConfig {
    pub data_path: PathBuf,
    pub data_url: Option<String>,
    pub frontend_path: PathBuf,
    pub flag_provider_url: String,
    pub flag_provider_secret: String,
    pub flag_ttl_secs: u64,
}

impl VitrinaConfig {
    pub fn from_env() -> Self {
        let data_path = PathBuf::from(
            std::env::var("DATA_PATH").unwrap_or_else(|_| "./assets/data.json".to_string()),
        );

        // when set, the loader fetches the document over HTTP instead of disk
        let data_url = std::env::var("DATA_URL").ok().filter(|v| !v.is_empty());

        let frontend_path = PathBuf::from(
            std::env::var("FRONTEND_DIST_PATH")
                .expect("Failed to determine FRONTEND_DIST_PATH from environment variables"),
        );

        let flag_provider_url = std::env::var("FLAG_PROVIDER_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:4100/v1/evaluate".to_string());

        let flag_provider_secret = std::env::var("FLAG_PROVIDER_SECRET").unwrap_or_default();

        let flag_ttl_secs = std::env::var("FLAG_CACHE_TTL_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FLAG_TTL_SECS);

        Self {
            data_path,
            data_url,
            frontend_path,
            flag_provider_url,
            flag_provider_secret,
            flag_ttl_secs,
        }
    }
}
