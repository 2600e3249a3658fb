//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CallsCommand, CallsQuery, GiftsQuery, LoginService};
use crate::inbound::http::listing::PageLimits;
use crate::inbound::http::resources::TimestampFormat;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub calls: Arc<dyn CallsCommand>,
    pub calls_query: Arc<dyn CallsQuery>,
    pub gifts: Arc<dyn GiftsQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub calls: Arc<dyn CallsCommand>,
    pub calls_query: Arc<dyn CallsQuery>,
    pub gifts: Arc<dyn GiftsQuery>,
    pub limits: PageLimits,
    pub timestamps: TimestampFormat,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state with default paging and timestamp settings.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            calls,
            calls_query,
            gifts,
        } = ports;
        Self {
            login,
            calls,
            calls_query,
            gifts,
            limits: PageLimits::default(),
            timestamps: TimestampFormat::default(),
        }
    }

    /// Replace the paging limits.
    #[must_use]
    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the timestamp rendering pattern.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: TimestampFormat) -> Self {
        self.timestamps = timestamps;
        self
    }
}
