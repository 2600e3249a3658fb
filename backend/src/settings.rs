//! Application settings loaded via OrthoConfig.
//!
//! Values come from `CRM_*` environment variables, CLI flags, or a config
//! file, in ascending precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::listing::{PageLimits, PageLimitsError};
use crate::inbound::http::resources::{
    DEFAULT_TIMESTAMP_FORMAT, TimestampFormat, TimestampFormatError,
};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime settings for the CRM backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CRM")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Listen address.
    pub host: Option<IpAddr>,
    /// Listen port.
    pub port: Option<u16>,
    /// strftime pattern for rendered timestamps.
    pub timestamp_format: Option<String>,
    /// Page size used when a request omits `limit`.
    pub default_limit: Option<u32>,
    /// Largest accepted `limit`.
    pub max_limit: Option<u32>,
    /// Apply pending migrations before serving.
    pub run_migrations: Option<bool>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

/// Settings that parsed but do not make sense together.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The page size bounds are inconsistent.
    #[error(transparent)]
    Limits(#[from] PageLimitsError),
    /// The timestamp pattern does not parse.
    #[error(transparent)]
    TimestampFormat(#[from] TimestampFormatError),
}

impl AppSettings {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Whether to migrate on start-up; on unless explicitly disabled.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Pool size, falling back to the default.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Pagination bounds, falling back to 10 and 100.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Limits`] when the default exceeds the maximum
    /// or either is zero.
    pub fn page_limits(&self) -> Result<PageLimits, SettingsError> {
        let defaults = PageLimits::default();
        Ok(PageLimits::new(
            self.default_limit.unwrap_or(defaults.default_limit()),
            self.max_limit.unwrap_or(defaults.max_limit()),
        )?)
    }

    /// Timestamp rendering, falling back to ISO 8601 UTC.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::TimestampFormat`] for an invalid pattern.
    pub fn timestamps(&self) -> Result<TimestampFormat, SettingsError> {
        Ok(TimestampFormat::new(
            self.timestamp_format
                .as_deref()
                .unwrap_or(DEFAULT_TIMESTAMP_FORMAT),
        )?)
    }
}
