mod activity;
mod burnout;
mod company;
mod notification;
pub mod user;

pub use activity::{Activity, NewActivity};
pub use burnout::BurnoutSymptoms;
pub use company::{Company, CompanyPatch, NewCompany};
pub use notification::{NewNotification, Notification};
pub use user::{LeaderboardEntry, NewUser, PublicProfile, User, UserPatch};
