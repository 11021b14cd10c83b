pub mod notes_handler;
pub mod roadmap_handler;

pub use notes_handler::{generate_notes, health_check};
pub use roadmap_handler::generate_roadmap;
