//! Top-level application state and action dispatch.

use fern_common::actions::Action;
use fern_common::events::{Event, EventBus};
use fern_common::types::{OverlayKind, ProfileId};
use fern_config::FernConfig;
use fern_modals::routes::modal_action_for_route;
use fern_modals::{ModalArbiter, ModalPayload, StaffGate};

/// Owns the config, the event bus, and the modal arbiter for one session.
pub struct FernApp {
    pub config: FernConfig,
    pub event_bus: EventBus,
    pub arbiter: ModalArbiter,
    pub staff: StaffGate,
    pub should_exit: bool,
}

impl FernApp {
    pub fn new(config: FernConfig, current_profile: Option<ProfileId>, staff_mode: bool) -> Self {
        let event_bus = EventBus::new(256);

        // Bridge modal mutations onto the bus, synchronously per mutation.
        let mut arbiter = ModalArbiter::new();
        let sender = event_bus.clone_sender();
        arbiter.store.subscribe(move |overlay, state| {
            let _ = sender.send(Event::ModalChanged {
                overlay,
                visible: state.visible,
            });
        });

        Self {
            config,
            event_bus,
            arbiter,
            staff: StaffGate::new(current_profile, staff_mode),
            should_exit: false,
        }
    }

    /// Apply a startup deep link, if it maps to a modal trigger.
    pub fn apply_route(&mut self, path_and_query: &str) {
        let logged_in = self.staff.current_profile.is_some();
        if let Some(action) = modal_action_for_route(path_and_query, logged_in) {
            tracing::info!(route = %path_and_query, "route-driven modal trigger");
            self.dispatch(action);
        }
    }

    /// Dispatch a resolved [`Action`] to the appropriate subsystem.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::OpenComposer => {
                self.arbiter.open_composer();
            }
            Action::ConfirmDiscard => {
                self.arbiter.confirm_discard();
            }
            Action::OpenAuth(mode) => {
                self.arbiter
                    .store
                    .request_show(OverlayKind::Auth, Some(ModalPayload::Auth(mode)));
            }
            Action::OpenInvites => {
                self.arbiter.store.request_show(OverlayKind::Invites, None);
            }
            Action::OpenProfileSwitch => {
                self.arbiter
                    .store
                    .request_show(OverlayKind::ProfileSwitch, None);
            }
            Action::ReportPublication(id) => {
                self.arbiter.store.request_show(
                    OverlayKind::PublicationReport,
                    Some(ModalPayload::Publication(id)),
                );
            }
            Action::ReportProfile(id) => {
                self.arbiter.store.request_show(
                    OverlayKind::ProfileReport,
                    Some(ModalPayload::Profile(id)),
                );
            }
            Action::CloseOverlay(kind) => {
                self.arbiter.close_intent(kind);
            }
            Action::Quit => {
                self.event_bus.publish(Event::Shutdown);
                self.should_exit = true;
            }
            Action::None => {
                tracing::debug!("noop action");
            }
        }
    }
}
