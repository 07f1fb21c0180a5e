//! Request handlers

mod wellbeing;

pub use wellbeing::*;
