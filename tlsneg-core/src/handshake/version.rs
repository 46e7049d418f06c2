//! Protocol version negotiation.

use crate::error::{AlertDescription, Error, Result};
use crate::protocol::ProtocolVersion;

/// Pick the server version for a client offering `client_version`.
///
/// Walks down from the client's version and returns the first version whose
/// name is in `allowed`. The result is never above the client's offer. Fails
/// with `protocol_version` when the walk runs out.
pub fn negotiate_version(client_version: ProtocolVersion, allowed: &[String]) -> Result<ProtocolVersion> {
    let selected = std::iter::successors(Some(client_version), |version| version.previous())
        .find(|version| allowed.iter().any(|name| name == version.name()));

    match selected {
        Some(version) => {
            tracing::debug!(
                "server selected {} for client offering {}",
                version.name(),
                client_version.name()
            );
            Ok(version)
        },
        None => Err(Error::fatal(
            AlertDescription::ProtocolVersion,
            format!("no enabled protocol at or below {}", client_version.name()),
        )),
    }
}
