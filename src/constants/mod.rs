use std::str::FromStr;

pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 500 * 1024 * 1024; // 500MB

pub struct Env {
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub workers: usize,
    pub max_upload_size: usize,
    pub upload_base_url: String,
    pub dashboard_data: Option<String>,
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            log::warn!("{} has an invalid value '{}', using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

impl Env {
    fn new() -> Self {
        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_or("PORT", 8080u16);
        let workers = parse_or("WORKERS", 2usize);
        let max_upload_size = parse_or("MAX_UPLOAD_SIZE", DEFAULT_MAX_UPLOAD_SIZE);
        let upload_base_url =
            std::env::var("UPLOAD_BASE_URL").unwrap_or_else(|_| "/uploads".to_string());
        let dashboard_data = std::env::var("DASHBOARD_DATA").ok().filter(|p| !p.is_empty());

        Env {
            frontend_url,
            ip,
            port,
            workers,
            max_upload_size,
            upload_base_url,
            dashboard_data,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
