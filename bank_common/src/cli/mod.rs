//! Building blocks shared by the interactive front ends:
//! user-facing constants and the prompt helpers.

pub mod constants;
pub mod helpers;
