mod handler;
mod model;

pub use handler::{create_activity, list_activities, list_user_activities};
pub use model::{CreateActivityRequest, EnrichedActivity};
