//! Server negotiation configuration.

use crate::cipher_suites::{default_cipher_suites, CipherSuite};
use crate::error::{Error, Result};
use crate::protocol::{CompressionMethod, ProtocolVersion};

/// Negotiation policy shared by every handshake of a server.
///
/// Built with [`Config::builder`], which validates the settings; a `Config`
/// never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Allowed protocol names (e.g. `"TLSv1.2"`)
    pub protocols: Vec<String>,

    /// Enabled cipher suites, in server preference order
    pub cipher_suites: Vec<CipherSuite>,

    /// Restrict negotiation to FIPS-approved algorithms
    pub fips: bool,

    /// Restrict curves to the approved set even outside FIPS mode
    pub restricted_curves: bool,

    /// Fail the handshake unless the client authenticates
    pub need_client_auth: bool,

    /// Request, but do not require, client authentication
    pub want_client_auth: bool,

    /// Enabled compression methods, in preference order
    pub compression_methods: Vec<CompressionMethod>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocols: vec![
                ProtocolVersion::Tls12.name().to_string(),
                ProtocolVersion::Tls11.name().to_string(),
                ProtocolVersion::Tls10.name().to_string(),
            ],
            cipher_suites: default_cipher_suites(),
            fips: false,
            restricted_curves: false,
            need_client_auth: false,
            want_client_auth: false,
            compression_methods: vec![CompressionMethod::Null],
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check if curve choice is limited to the approved set.
    pub fn restricts_curves(&self) -> bool {
        self.fips || self.restricted_curves
    }

    /// Check if the server asks clients for a certificate.
    pub fn requests_client_auth(&self) -> bool {
        self.need_client_auth || self.want_client_auth
    }

    /// Check if `version` is in the allowed protocols.
    pub fn allows_version(&self, version: ProtocolVersion) -> bool {
        self.protocols.iter().any(|name| name == version.name())
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set allowed protocols by name.
    pub fn with_protocols(mut self, protocols: &[&str]) -> Self {
        self.config.protocols = protocols.iter().map(|name| name.to_string()).collect();
        self
    }

    /// Set allowed protocol versions.
    pub fn with_protocol_versions(mut self, versions: &[ProtocolVersion]) -> Self {
        self.config.protocols = versions.iter().map(|v| v.name().to_string()).collect();
        self
    }

    /// Set enabled cipher suites, most preferred first.
    pub fn with_cipher_suites(mut self, suites: &[CipherSuite]) -> Self {
        self.config.cipher_suites = suites.to_vec();
        self
    }

    /// Enable FIPS mode.
    pub fn with_fips(mut self, fips: bool) -> Self {
        self.config.fips = fips;
        self
    }

    /// Restrict curves to the approved set.
    pub fn with_restricted_curves(mut self, restricted: bool) -> Self {
        self.config.restricted_curves = restricted;
        self
    }

    /// Require client authentication. Clears the "want" setting.
    pub fn with_need_client_auth(mut self, need: bool) -> Self {
        self.config.need_client_auth = need;
        self.config.want_client_auth = false;
        self
    }

    /// Request optional client authentication. Clears the "need" setting.
    pub fn with_want_client_auth(mut self, want: bool) -> Self {
        self.config.want_client_auth = want;
        self.config.need_client_auth = false;
        self
    }

    /// Set enabled compression methods.
    pub fn with_compression_methods(mut self, methods: &[CompressionMethod]) -> Self {
        self.config.compression_methods = methods.to_vec();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<Config> {
        let config = self.config;

        if config.protocols.is_empty() {
            return Err(Error::InvalidConfig("No protocols enabled".into()));
        }

        if let Some(unknown) = config
            .protocols
            .iter()
            .find(|name| ProtocolVersion::from_name(name).is_none())
        {
            return Err(Error::InvalidConfig(format!("Unknown protocol: {}", unknown)));
        }

        if config.cipher_suites.is_empty() {
            return Err(Error::InvalidConfig("No cipher suites enabled".into()));
        }

        if !config.compression_methods.contains(&CompressionMethod::Null) {
            return Err(Error::InvalidConfig(
                "Null compression must be enabled".into(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::builder().build().unwrap();
        assert!(config.allows_version(ProtocolVersion::Tls12));
        assert!(!config.allows_version(ProtocolVersion::Ssl30));
        assert!(!config.restricts_curves());
        assert!(!config.requests_client_auth());
        assert_eq!(config.compression_methods, vec![CompressionMethod::Null]);
    }

    #[test]
    fn test_client_auth_settings_are_exclusive() {
        let config = Config::builder()
            .with_want_client_auth(true)
            .with_need_client_auth(true)
            .build()
            .unwrap();
        assert!(config.need_client_auth);
        assert!(!config.want_client_auth);

        let config = Config::builder()
            .with_need_client_auth(true)
            .with_want_client_auth(true)
            .build()
            .unwrap();
        assert!(!config.need_client_auth);
        assert!(config.want_client_auth);
    }

    #[test]
    fn test_fips_restricts_curves() {
        let config = Config::builder().with_fips(true).build().unwrap();
        assert!(config.restricts_curves());
        let config = Config::builder().with_restricted_curves(true).build().unwrap();
        assert!(config.restricts_curves());
    }

    #[test]
    fn test_validation() {
        // Should fail: no protocols
        let result = Config::builder().with_protocols(&[]).build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        // Should fail: unknown protocol name
        let result = Config::builder().with_protocols(&["TLSv9"]).build();
        assert!(result.is_err());

        // Should fail: no cipher suites
        let result = Config::builder().with_cipher_suites(&[]).build();
        assert!(result.is_err());

        // Should fail: null compression missing
        let result = Config::builder()
            .with_compression_methods(&[CompressionMethod::Deflate])
            .build();
        assert!(result.is_err());
    }
}
