// src/survey/mod.rs

pub mod case_state;
pub mod nav;
pub mod ops;
pub mod submit;
pub mod types;
pub mod validate;

pub use case_state::*;
pub use nav::*;
pub use ops::*;
pub use submit::*;
pub use types::*;
pub use validate::*;
