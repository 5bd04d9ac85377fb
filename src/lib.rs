pub mod analysis;
pub mod catalog;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod lsp;
pub mod text;

pub use catalog::{
    MethodDescriptor, Service, ServiceDescriptor, list_generic_keywords_and_functions,
    list_methods, list_services, lookup_hover,
};
pub use config::{DelugeSettings, WorkspaceSettings};
pub use context::{TriggerContext, resolve_context};
pub use error::{LspError, LspResult};
