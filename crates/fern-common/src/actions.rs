use serde::{Deserialize, Serialize};

use crate::types::{AuthMode, OverlayKind, ProfileId, PublicationId};

/// Every user-triggerable action in the client.
///
/// Deep links, UI callbacks, and the CLI all resolve to an `Action`.
/// The app dispatcher matches on this enum to route to the modal arbiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    // -- Composer --
    OpenComposer,
    ConfirmDiscard,

    // -- Overlays --
    OpenAuth(AuthMode),
    OpenInvites,
    OpenProfileSwitch,
    ReportPublication(PublicationId),
    ReportProfile(ProfileId),
    CloseOverlay(OverlayKind),

    // -- App --
    Quit,

    // -- Noop --
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_round_trips_through_json() {
        let action = Action::ReportPublication(PublicationId("0x01-0x02".into()));
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn close_overlay_carries_kind() {
        let action = Action::CloseOverlay(OverlayKind::NewPost);
        assert!(matches!(
            action,
            Action::CloseOverlay(OverlayKind::NewPost)
        ));
    }
}
