mod handler;
mod model;

pub use handler::{create_notification, list_notifications, mark_read};
pub use model::CreateNotificationRequest;
