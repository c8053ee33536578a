//! The modal state registry: one visibility flag per overlay kind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fern_common::types::{AuthMode, OverlayKind, ProfileId, PublicationId};

/// Context an overlay was opened with (which publication is being reported,
/// which auth flow was requested, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ModalPayload {
    Publication(PublicationId),
    Profile(ProfileId),
    Auth(AuthMode),
}

/// Visibility state of one overlay. Hiding an overlay deliberately keeps
/// its payload, so a just-closed modal still exposes its last target to
/// close animations and guard logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalState {
    pub visible: bool,
    pub payload: Option<ModalPayload>,
}

type Subscriber = Box<dyn Fn(OverlayKind, &ModalState) + Send>;

/// Session-lifetime registry of overlay visibility.
///
/// The flags are independent and non-exclusive at the data level; mutual
/// exclusion, where it exists, is a presentation concern. All transitions
/// go through [`request_show`](Self::request_show) /
/// [`request_hide`](Self::request_hide) — there is no raw field mutation,
/// both are idempotent, and neither can fail. Subscribers are notified
/// synchronously on every mutation, one kind at a time, no batching.
pub struct ModalStateStore {
    states: HashMap<OverlayKind, ModalState>,
    subscribers: Vec<Subscriber>,
}

impl ModalStateStore {
    /// Create the registry with every overlay hidden and payload-free.
    pub fn new() -> Self {
        let states = OverlayKind::ALL
            .iter()
            .map(|&kind| (kind, ModalState::default()))
            .collect();
        Self {
            states,
            subscribers: Vec::new(),
        }
    }

    /// Register a subscriber invoked synchronously after each mutation.
    pub fn subscribe(&mut self, f: impl Fn(OverlayKind, &ModalState) + Send + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Request that `kind` become visible, overwriting its payload.
    pub fn request_show(&mut self, kind: OverlayKind, payload: Option<ModalPayload>) {
        tracing::debug!(overlay = ?kind, "modal show requested");
        let state = self.states.entry(kind).or_default();
        state.visible = true;
        state.payload = payload;
        self.notify(kind);
    }

    /// Request that `kind` become hidden. The payload is retained.
    pub fn request_hide(&mut self, kind: OverlayKind) {
        tracing::debug!(overlay = ?kind, "modal hide requested");
        let state = self.states.entry(kind).or_default();
        state.visible = false;
        self.notify(kind);
    }

    /// Current state of one overlay.
    pub fn state(&self, kind: OverlayKind) -> &ModalState {
        // every kind is seeded in new(), so the lookup cannot miss
        &self.states[&kind]
    }

    pub fn is_visible(&self, kind: OverlayKind) -> bool {
        self.state(kind).visible
    }

    pub fn payload(&self, kind: OverlayKind) -> Option<&ModalPayload> {
        self.state(kind).payload.as_ref()
    }

    /// All currently visible overlays, in presentation order.
    pub fn visible_overlays(&self) -> Vec<OverlayKind> {
        OverlayKind::ALL
            .iter()
            .copied()
            .filter(|&kind| self.is_visible(kind))
            .collect()
    }

    /// Session teardown: hide everything and drop payloads.
    pub fn reset(&mut self) {
        for kind in OverlayKind::ALL {
            let state = self.states.entry(kind).or_default();
            state.visible = false;
            state.payload = None;
            self.notify(kind);
        }
    }

    fn notify(&self, kind: OverlayKind) {
        let state = &self.states[&kind];
        for subscriber in &self.subscribers {
            subscriber(kind, state);
        }
    }
}

impl Default for ModalStateStore {
    fn default() -> Self {
        Self::new()
    }
}
