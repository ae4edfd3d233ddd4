pub mod bridge;
pub mod common;
pub mod workflow;
