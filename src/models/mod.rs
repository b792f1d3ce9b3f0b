pub mod activity_log;
pub mod persona_settings;
pub mod profile;
pub mod profile_action;
pub mod queue_action;

pub use activity_log::ActivityLogEntry;
pub use persona_settings::PersonaSettings;
pub use profile::Profile;
pub use profile_action::ProfileAction;
pub use queue_action::{ActionStatus, ActionType, QueueAction};
