//! Configuration for the refresh runner.
//!
//! All configuration is loaded from environment variables. The runner
//! needs to know how to reach the document store, where to serve the view
//! API, how often to refresh the event list, and the initial map camera.

use std::time::Duration;

use lifemap_types::{GeoPoint, MapCamera};

use crate::error::RunnerError;

/// Complete runner configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Base URL of the document store (e.g. `https://store.example.com`).
    pub store_url: String,
    /// Collection holding the life event documents.
    pub collection: String,
    /// Optional project API key sent to the store.
    pub api_key: Option<String>,
    /// Per-request HTTP timeout for store calls.
    pub http_timeout: Duration,
    /// Host address the view API binds to.
    pub observer_host: String,
    /// TCP port the view API listens on.
    pub observer_port: u16,
    /// How often to refetch the event list. `None` disables periodic
    /// refresh (the initial fetch still happens).
    pub refresh_interval: Option<Duration>,
    /// Initial map camera shown before any search re-centering.
    pub camera: MapCamera,
}

impl RunnerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `LIFEMAP_STORE_URL` -- document store base URL
    ///
    /// Optional variables:
    /// - `LIFEMAP_COLLECTION` -- event collection name (default `lifeEvents`)
    /// - `LIFEMAP_STORE_API_KEY` -- project API key (default none)
    /// - `HTTP_TIMEOUT_SECS` -- store request timeout (default 10)
    /// - `OBSERVER_HOST` -- bind address (default `0.0.0.0`)
    /// - `OBSERVER_PORT` -- listen port (default 8080)
    /// - `REFRESH_INTERVAL_SECS` -- refetch period, 0 disables (default 300)
    /// - `MAP_CENTER_LAT` / `MAP_CENTER_LNG` -- initial camera center
    ///   (default 35.6812 / 139.7671)
    /// - `MAP_ZOOM` -- initial zoom level (default 10)
    pub fn from_env() -> Result<Self, RunnerError> {
        let store_url = env_var("LIFEMAP_STORE_URL")?;
        let collection =
            std::env::var("LIFEMAP_COLLECTION").unwrap_or_else(|_| String::from("lifeEvents"));
        let api_key = std::env::var("LIFEMAP_STORE_API_KEY").ok();

        let http_timeout_secs: u64 = parse_or_default(
            std::env::var("HTTP_TIMEOUT_SECS").ok(),
            "HTTP_TIMEOUT_SECS",
            10,
        )?;
        let observer_host =
            std::env::var("OBSERVER_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));
        let observer_port: u16 = parse_or_default(
            std::env::var("OBSERVER_PORT").ok(),
            "OBSERVER_PORT",
            8080,
        )?;
        let refresh_secs: u64 = parse_or_default(
            std::env::var("REFRESH_INTERVAL_SECS").ok(),
            "REFRESH_INTERVAL_SECS",
            300,
        )?;

        let center_lat: f64 = parse_or_default(
            std::env::var("MAP_CENTER_LAT").ok(),
            "MAP_CENTER_LAT",
            35.6812,
        )?;
        let center_lng: f64 = parse_or_default(
            std::env::var("MAP_CENTER_LNG").ok(),
            "MAP_CENTER_LNG",
            139.7671,
        )?;
        let zoom: u8 = parse_or_default(std::env::var("MAP_ZOOM").ok(), "MAP_ZOOM", 10)?;

        let camera = camera_from(center_lat, center_lng, zoom)?;

        Ok(Self {
            store_url,
            collection,
            api_key,
            http_timeout: Duration::from_secs(http_timeout_secs),
            observer_host,
            observer_port,
            refresh_interval: (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs)),
            camera,
        })
    }
}

/// Read a required environment variable.
fn env_var(name: &str) -> Result<String, RunnerError> {
    std::env::var(name)
        .map_err(|e| RunnerError::Config(format!("missing required env var {name}: {e}")))
}

/// Parse an optional setting, falling back to its default when unset.
fn parse_or_default<T: core::str::FromStr>(
    value: Option<String>,
    name: &str,
    default: T,
) -> Result<T, RunnerError>
where
    T::Err: core::fmt::Display,
{
    value.map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| RunnerError::Config(format!("invalid {name}: {e}")))
    })
}

/// Validate the configured camera center through the coordinate pipeline.
///
/// Reuses the same total conversion the grouper applies to events, so a
/// misconfigured center fails startup instead of producing a marker-less
/// map over the open ocean at `NaN`.
fn camera_from(lat: f64, lng: f64, zoom: u8) -> Result<MapCamera, RunnerError> {
    let point = GeoPoint::numeric(lat, lng).resolve().ok_or_else(|| {
        RunnerError::Config(format!(
            "MAP_CENTER_LAT/MAP_CENTER_LNG out of range: {lat}, {lng}"
        ))
    })?;
    Ok(MapCamera::new(point.to_lat_lng(), zoom))
}
