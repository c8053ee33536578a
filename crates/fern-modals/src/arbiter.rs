//! Modal arbitration: routes close intents through the draft guard and
//! derives what is actually presented.

use serde::{Deserialize, Serialize};

use fern_common::types::{AuthMode, OverlayKind};

use crate::composer::{ComposerStores, DraftSnapshot};
use crate::draft::is_draft_empty;
use crate::overlay::{ModalPayload, ModalStateStore};

/// Where the signup sub-flow currently is. `Choose` is the entry screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupScreen {
    #[default]
    Choose,
    Create,
    Minting,
    Success,
}

/// Read-only input from the signup flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignupStore {
    pub screen: SignupScreen,
}

/// One overlay as it should be presented right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedModal {
    pub kind: OverlayKind,
    pub title: Option<&'static str>,
    pub payload: Option<ModalPayload>,
}

/// The single authority that turns user intents into modal transitions.
///
/// Owns the [`ModalStateStore`] and the composer sub-stores so a close
/// intent and the guard that judges it see the same state.
pub struct ModalArbiter {
    pub store: ModalStateStore,
    pub composer: ComposerStores,
    pub signup: SignupStore,
}

impl ModalArbiter {
    pub fn new() -> Self {
        Self {
            store: ModalStateStore::new(),
            composer: ComposerStores::default(),
            signup: SignupStore::default(),
        }
    }

    /// Open the composer overlay.
    pub fn open_composer(&mut self) {
        self.store.request_show(OverlayKind::NewPost, None);
    }

    /// Handle a close intent for any overlay.
    ///
    /// The composer is the only guarded kind: a non-empty draft converts
    /// the close into a discard-confirmation prompt and leaves the
    /// composer itself untouched. Every other kind hides unconditionally.
    pub fn close_intent(&mut self, kind: OverlayKind) {
        if kind != OverlayKind::NewPost {
            self.store.request_hide(kind);
            return;
        }

        let snapshot = DraftSnapshot::capture(&self.composer);
        if is_draft_empty(&snapshot) {
            self.store.request_hide(OverlayKind::NewPost);
        } else {
            tracing::debug!("composer close blocked: draft in progress");
            self.store
                .request_show(OverlayKind::DiscardConfirmation, None);
        }
    }

    /// The user confirmed the discard: clear the draft and close both the
    /// confirmation and the composer.
    pub fn confirm_discard(&mut self) {
        self.composer.reset();
        self.store.request_hide(OverlayKind::DiscardConfirmation);
        self.store.request_hide(OverlayKind::NewPost);
    }

    /// Title for the auth overlay.
    ///
    /// Signup shows "Signup" only on its entry screen and drops the title
    /// once the flow has advanced; login is always "Login".
    pub fn auth_title(mode: AuthMode, screen: SignupScreen) -> Option<&'static str> {
        match mode {
            AuthMode::Signup => {
                if screen == SignupScreen::Choose {
                    Some("Signup")
                } else {
                    None
                }
            }
            AuthMode::Login => Some("Login"),
        }
    }

    /// Title for any overlay kind given the current auth/signup state.
    pub fn modal_title(&self, kind: OverlayKind) -> Option<&'static str> {
        match kind {
            OverlayKind::PublicationReport => Some("Report Publication"),
            OverlayKind::ProfileReport => Some("Report profile"),
            OverlayKind::ProfileSwitch => Some("Switch Profile"),
            OverlayKind::NewPost => Some("Create post"),
            OverlayKind::Invites => Some("Invites"),
            OverlayKind::DiscardConfirmation => Some("Discard post"),
            OverlayKind::Auth => {
                let mode = match self.store.payload(OverlayKind::Auth) {
                    Some(ModalPayload::Auth(mode)) => *mode,
                    _ => AuthMode::Login,
                };
                Self::auth_title(mode, self.signup.screen)
            }
        }
    }

    /// Every overlay whose visibility flag is set, as an independent
    /// presentation container. Showing one never hides another.
    pub fn presented(&self) -> Vec<PresentedModal> {
        self.store
            .visible_overlays()
            .into_iter()
            .map(|kind| PresentedModal {
                kind,
                title: self.modal_title(kind),
                payload: self.store.state(kind).payload.clone(),
            })
            .collect()
    }
}

impl Default for ModalArbiter {
    fn default() -> Self {
        Self::new()
    }
}
