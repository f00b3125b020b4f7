#![allow(dead_code)]

pub mod fake_backend;
pub mod provider_stub;
pub mod test_app;

pub use fake_backend::{FakeBackend, FakeReply};
pub use provider_stub::{ProviderStub, RecordedCall};
pub use test_app::TestApp;
