pub mod json;

pub use json::{update_object, update_path};
