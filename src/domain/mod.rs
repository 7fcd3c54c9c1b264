//! Domain layer: entities and layout rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod layout;

pub use entities::*;
pub use error::DomainError;
pub use layout::{template_path, DocSection, TEMPLATE_SUFFIX};
