pub mod activity;
pub mod auth;
pub mod burnout;
pub mod company;
pub mod notification;
