pub mod blank;
pub mod substitute;
pub mod trim;

pub use blank::remove_blank;
pub use substitute::{substitute, substitute_line};
pub use trim::{trim, trim_line};
