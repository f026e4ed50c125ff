pub mod interrupt;
pub mod logic;

pub use logic::{SessionEnd, Shell};
