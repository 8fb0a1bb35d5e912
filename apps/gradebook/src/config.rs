//! # Server Configuration
//!
//! Runtime settings for the HTTP server, built from CLI flags and
//! environment variables (see [`crate::cli::ServeArgs`]).

use gradebook_core::{FixtureError, Fixtures, IdStrategy, Store};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Default bind host.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,

    /// Serve the GraphiQL IDE on `GET /graphql`.
    pub graphiql: bool,

    /// Attach a permissive CORS layer.
    pub cors: bool,

    /// How new record ids are chosen.
    pub id_strategy: IdStrategy,

    /// Directory holding `courses.json`, `students.json` and `grades.json`.
    /// `None` uses the bundled dataset.
    pub fixtures_dir: Option<PathBuf>,

    /// Global request quota per second. `None` disables rate limiting.
    pub rate_limit: Option<NonZeroU32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            graphiql: true,
            cors: true,
            id_strategy: IdStrategy::default(),
            fixtures_dir: None,
            rate_limit: None,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn with_address(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    #[must_use]
    pub fn without_graphiql(mut self) -> Self {
        self.graphiql = false;
        self
    }

    #[must_use]
    pub fn without_cors(mut self) -> Self {
        self.cors = false;
        self
    }

    #[must_use]
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = Some(dir.into());
        self
    }

    /// Limit the server to `per_second` requests. Zero disables the limit.
    #[must_use]
    pub fn with_rate_limit(mut self, per_second: u32) -> Self {
        self.rate_limit = NonZeroU32::new(per_second);
        self
    }

    /// Load the configured fixtures into a fresh store.
    pub fn load_store(&self) -> Result<Store, FixtureError> {
        let fixtures = match &self.fixtures_dir {
            Some(dir) => Fixtures::load_dir(dir)?,
            None => Fixtures::embedded()?,
        };
        Ok(Store::from_fixtures(fixtures, self.id_strategy))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_port_3000_with_graphiql() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
        assert!(config.addr.ip().is_loopback());
        assert_eq!(config.addr.port(), 3000);
        assert!(config.graphiql);
        assert!(config.rate_limit.is_none());
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
    }

    #[test]
    fn zero_rate_limit_disables_limiting() {
        let config = ServerConfig::default().with_rate_limit(0);
        assert!(config.rate_limit.is_none());

        let config = config.with_rate_limit(5);
        assert_eq!(config.rate_limit.map(NonZeroU32::get), Some(5));
    }

    #[test]
    fn load_store_uses_embedded_fixtures_by_default() {
        let store = ServerConfig::default().load_store().unwrap();
        assert_eq!(store.counts().courses, Fixtures::embedded().unwrap().courses.len());
    }

    #[test]
    fn load_store_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::default().with_fixtures_dir(dir.path().join("absent"));
        assert!(config.load_store().is_err());
    }
}
