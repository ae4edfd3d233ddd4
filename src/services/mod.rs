pub mod whatsapp;
pub mod workflow;
