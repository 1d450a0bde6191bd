pub mod blocks;
pub mod convert;
pub mod document;
pub mod io;
pub mod serialize;

// Re-export key types for easier usage
pub use blocks::{Block, HeadingLevel};
pub use convert::classify::{ChunkClassifier, ChunkKind};
pub use convert::convert_content_to_blocks;
pub use document::{ArticleOutline, ChapterSource, assemble_article, extract_chapter_title};
pub use serialize::serialize_blocks;
