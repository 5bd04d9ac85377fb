//! Request-independent builders for completion and hover payloads.

pub mod completion;
pub mod hover;

pub use completion::{CompletionOptions, completion_items, method_detail, method_documentation};
pub use hover::hover_for_word;
