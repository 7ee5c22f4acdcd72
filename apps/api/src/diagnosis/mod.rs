// Skin diagnosis: indicators → skin profile → 3-product routine.
// Both stages are pure functions over ordered rule lists; no I/O, no failure path.

pub mod handlers;
pub mod profiler;
pub mod selector;

pub use profiler::{classify, Concern, SkinProfile, SkinType};
pub use selector::{select, Selection};
