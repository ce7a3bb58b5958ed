// JSON API handlers, one module per route group.

pub mod explain;
pub mod mood;
pub mod status;
