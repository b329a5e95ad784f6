mod portable;
mod uuid;
mod variant;

pub use portable::*;
pub use uuid::*;
pub use variant::*;
