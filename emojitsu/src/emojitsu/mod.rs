pub mod artifact;
pub mod codec;
pub mod config;
pub mod engine;
pub mod generator;
pub mod html;
pub mod matcher;
pub mod renderer;
pub mod store;
pub mod types;

pub use config::GeneratorConfig;
pub use engine::{Emojitsu, LoadError, Token};
pub use renderer::RenderOptions;
pub use store::{DataIntegrityError, EmojiStore};
pub use types::{Artifact, EmojiRecord};
