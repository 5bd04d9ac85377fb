//! Static completion and hover tables for Deluge.
//!
//! Everything here is `'static` data; lookups are total and never fail.
//! Unknown input yields an empty slice or `None`.

mod generic;
mod hover;
mod methods;
mod service;

pub use generic::{
    BUILTIN_FUNCTIONS, GenericEntry, GenericKind, KEYWORDS, list_generic_keywords_and_functions,
};
pub use hover::{documented_words, lookup_hover};
pub use methods::{MethodDescriptor, list_methods, methods};
pub use service::{Service, ServiceDescriptor, list_services};
