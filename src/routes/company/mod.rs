mod handler;

pub use handler::{get_company, list_companies};
