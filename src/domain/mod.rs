// Domain layer - Core types, naming and filter rules

pub mod errors;
pub mod model;
pub mod rules;
