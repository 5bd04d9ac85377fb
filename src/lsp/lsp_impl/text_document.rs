//! Text document related LSP methods.

mod completion;
mod hover;
