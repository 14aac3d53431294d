pub mod interface;
pub mod google;
pub mod client;
pub mod factory;

pub use interface::Translator;
pub use google::GoogleTranslateClient;
pub use client::TranslateClient;
pub use factory::TranslateFactory;
