//! Staff-tools gate: who may see the internal stats dashboard.

use fern_common::types::ProfileId;

/// Read-only inputs from the profile and feature-flag stores.
#[derive(Debug, Clone, Default)]
pub struct StaffGate {
    pub current_profile: Option<ProfileId>,
    pub staff_mode: bool,
}

impl StaffGate {
    pub fn new(current_profile: Option<ProfileId>, staff_mode: bool) -> Self {
        Self {
            current_profile,
            staff_mode,
        }
    }

    /// Staff tools require both a logged-in profile and staff mode enabled.
    pub fn can_view_staff_tools(&self) -> bool {
        self.current_profile.is_some() && self.staff_mode
    }
}
