pub mod clipboard;
pub mod config;
pub mod header;
pub mod input;
pub mod output;
pub mod processor;
pub mod transformer;
pub mod transformers;

pub use clipboard::*;
pub use config::*;
pub use header::*;
pub use input::*;
pub use output::*;
pub use processor::*;
pub use transformer::*;
pub use transformers::*;
