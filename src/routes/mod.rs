pub mod bridge;
pub mod health;
pub mod send;
