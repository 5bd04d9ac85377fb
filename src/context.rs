//! Trigger-context resolution.
//!
//! Classifies the text to the left of the cursor into one of three shapes:
//!
//! - `...zoho.` → [`TriggerContext::NamespaceRoot`]
//! - `...zoho.<service>.` → [`TriggerContext::ServiceScoped`]
//! - anything else → [`TriggerContext::Generic`]
//!
//! Only the end of the input matters; earlier occurrences of `zoho.crm.`
//! followed by more text do not count.

use crate::catalog::Service;

const NAMESPACE: &str = "zoho.";
const SEPARATOR: char = '.';

/// Where the cursor sits relative to the `zoho.` namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerContext {
    /// Cursor immediately after `zoho.`.
    NamespaceRoot,
    /// Cursor immediately after `zoho.<service>.`.
    ServiceScoped { service: Service },
    /// Any other position.
    Generic,
}

/// Classify `line_prefix`, the current line from column 0 up to the cursor.
///
/// Total and case-sensitive. No whitespace is tolerated between the final
/// `.` and the cursor.
pub fn resolve_context(line_prefix: &str) -> TriggerContext {
    if line_prefix.ends_with(NAMESPACE) {
        return TriggerContext::NamespaceRoot;
    }

    let Some(body) = line_prefix.strip_suffix(SEPARATOR) else {
        return TriggerContext::Generic;
    };

    Service::ALL
        .into_iter()
        .find(|service| {
            body.strip_suffix(service.as_str())
                .is_some_and(|rest| rest.ends_with(NAMESPACE))
        })
        .map_or(TriggerContext::Generic, |service| {
            TriggerContext::ServiceScoped { service }
        })
}
