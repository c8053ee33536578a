//! Global modal coordination.
//!
//! One visibility flag per [`OverlayKind`](fern_common::OverlayKind), a
//! session-lifetime [`ModalStateStore`] as the single authority over those
//! flags, and a [`ModalArbiter`] that applies the draft guard before a
//! destructive composer close.

pub mod arbiter;
pub mod composer;
pub mod draft;
pub mod overlay;
pub mod routes;
pub mod staff;

pub use arbiter::{ModalArbiter, PresentedModal, SignupScreen, SignupStore};
pub use composer::{ComposerStores, DraftSnapshot};
pub use draft::is_draft_empty;
pub use overlay::{ModalPayload, ModalState, ModalStateStore};
pub use staff::StaffGate;
