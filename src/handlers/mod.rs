pub mod chat;
pub mod health;
pub mod moods;

pub use chat::*;
pub use health::*;
pub use moods::*;
