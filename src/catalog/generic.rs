//! Deluge keywords and built-in functions offered outside the `zoho.` namespace.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenericKind {
    Keyword,
    Function,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenericEntry {
    pub name: &'static str,
    pub kind: GenericKind,
}

pub const KEYWORDS: [&str; 19] = [
    "if",
    "else",
    "for",
    "while",
    "return",
    "break",
    "continue",
    "try",
    "catch",
    "throw",
    "each",
    "in",
    "void",
    "Map",
    "List",
    "Collection",
    "info",
    "sendmail",
    "invokeurl",
];

pub const BUILTIN_FUNCTIONS: [&str; 12] = [
    "toDate",
    "toDateTime",
    "toNumber",
    "toLong",
    "toText",
    "toString",
    "equals",
    "isNull",
    "isEmpty",
    "contains",
    "trim",
    "length",
];

/// Keywords followed by built-in functions.
pub fn list_generic_keywords_and_functions() -> Vec<GenericEntry> {
    let keywords = KEYWORDS.iter().map(|&name| GenericEntry {
        name,
        kind: GenericKind::Keyword,
    });
    let functions = BUILTIN_FUNCTIONS.iter().map(|&name| GenericEntry {
        name,
        kind: GenericKind::Function,
    });
    keywords.chain(functions).collect()
}
