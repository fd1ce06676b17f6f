// Core data models for Tosh
// These structs represent the domain entities

pub mod task;

pub use task::*;
