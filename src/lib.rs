pub mod assets;
pub mod config;
pub mod describe;
pub mod doctags;
pub mod error;
pub mod merge;
pub mod render;
pub mod scanner;
pub mod transform;

pub use assets::{format_file_doc, FILE_DOC_TEMPLATE};
pub use config::{Config, CONFIG_FILENAME};
pub use describe::{DescriptionEntry, README_FILENAME};
pub use error::{Result, ZlanddocError};
pub use render::{END_SENTINEL, START_SENTINEL};
pub use transform::{FileContents, ReadmeTransform, TargetFile};
