//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use crm_backend::inbound::http::listing::PageLimits;
use crm_backend::inbound::http::resources::TimestampFormat;
use crm_backend::inbound::http::session_config::SessionSettings;
use crm_backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) limits: PageLimits,
    pub(crate) timestamps: TimestampFormat,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration from session settings and a pool.
    ///
    /// Paging and timestamp rendering start at their defaults.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool,
            limits: PageLimits::default(),
            timestamps: TimestampFormat::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Override the page-size bounds applied to listings.
    #[must_use]
    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Override how timestamps are rendered.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: TimestampFormat) -> Self {
        self.timestamps = timestamps;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: PrometheusMetrics) -> Self {
        self.prometheus = Some(prometheus);
        self
    }
}
