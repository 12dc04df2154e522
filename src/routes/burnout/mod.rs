mod handler;

pub use handler::{leaderboard, symptoms};
