//! View-model state for each screen.
//!
//! DESIGN
//! ======
//! State is split per view (`owners`, `pets`, `vets`, `visits`, `chat`) so
//! each page holds one small model in a signal. Models are plain structs:
//! controllers produce results, and the `finish_*` methods fold them in.

pub mod chat;
pub mod owners;
pub mod pets;
pub mod vets;
pub mod visits;
