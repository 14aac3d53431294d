pub mod interface;
pub mod google;
pub mod client;
pub mod factory;
pub mod store;

pub use interface::{SpeechArtifact, SpeechSynthesizer};
pub use google::GoogleTTSClient;
pub use client::TTSClient;
pub use factory::TTSFactory;
pub use store::AudioStore;
