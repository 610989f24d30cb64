//! Core modules for uuidwhen

pub mod decoder;
pub mod matcher;
pub mod relative;
pub mod scanner;
pub mod store;

pub use decoder::TimestampDecoder;
pub use matcher::UuidMatcher;
pub use relative::RelativeFormatter;
pub use scanner::Scanner;
pub use store::{AnnotationStore, RescanDiff, Span};
