pub mod chat;
pub mod requests;
