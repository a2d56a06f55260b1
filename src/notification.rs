//! Transient notifications
//!
//! Short messages drawn in the top-right corner over the dashboard, used for
//! config warnings, rejected queries and clipboard confirmations.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
