pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, FernError, StatsError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, SessionId};
pub use types::{AuthMode, OverlayKind, ProfileId, PublicationId};

pub type Result<T> = std::result::Result<T, FernError>;
