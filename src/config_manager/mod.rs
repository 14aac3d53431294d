pub mod main;
pub mod system;
pub mod grammar;
pub mod translate;
pub mod tts;
pub mod utils;

pub use main::Config;
