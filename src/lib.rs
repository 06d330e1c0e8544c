pub mod config;
pub mod reader;
pub mod report;
pub mod sample;
pub mod session;
pub mod text_processor;
pub mod word_index;
pub mod writer;

// Re-export main types for convenient access
pub use word_index::{InOrder, WordIndex, WordNode};

pub use text_processor::{
    LineChange, ReplaceOutcome, Replacement, TextProcessor, WholeWordReplacer
};

// Re-export run plumbing used by the CLI and integration tests
pub use config::{ReplaceRequest, RunConfig};
pub use reader::{AsyncFileReader, ReaderConfig, ReadStats};
pub use session::{Session, SessionState};
pub use writer::{AsyncFileWriter, WriteStats};
