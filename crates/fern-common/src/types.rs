use serde::{Deserialize, Serialize};
use std::fmt;

/// A profile identifier as served by the upstream API (hex string, e.g. `0x01`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A publication identifier (hex string, e.g. `0x01-0x02`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicationId(pub String);

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every overlay the client can present. One visibility flag exists per kind;
/// the flags are independent and non-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    PublicationReport,
    ProfileReport,
    ProfileSwitch,
    Auth,
    NewPost,
    Invites,
    DiscardConfirmation,
}

impl OverlayKind {
    /// All kinds, in presentation order.
    pub const ALL: [OverlayKind; 7] = [
        OverlayKind::PublicationReport,
        OverlayKind::ProfileReport,
        OverlayKind::ProfileSwitch,
        OverlayKind::Auth,
        OverlayKind::NewPost,
        OverlayKind::Invites,
        OverlayKind::DiscardConfirmation,
    ];
}

/// Which flow the auth overlay was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Login,
    Signup,
}
