// Domain layer - Core types and interval rules

pub mod errors;
pub mod model;
pub mod rules;
