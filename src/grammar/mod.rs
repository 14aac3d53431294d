pub mod interface;
pub mod huggingface;
pub mod client;
pub mod factory;

pub use interface::GrammarCorrector;
pub use huggingface::HuggingFaceCorrector;
pub use client::GrammarClient;
pub use factory::GrammarFactory;
