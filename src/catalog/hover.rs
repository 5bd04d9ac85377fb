//! Hover documentation keyed by bare identifier.
//!
//! Lookups are by exact word only. A method name shared by several services
//! (e.g. `getRecords`) resolves to the same text regardless of the service.

const HOVER_DOCS: [(&str, &str); 6] = [
    (
        "getRecords",
        "**getRecords** - Fetches records from a specified module.\n\n\
         **Syntax:** `zoho.crm.getRecords(module_name, page, per_page, query_value, connection)`",
    ),
    (
        "createRecord",
        "**createRecord** - Creates a new record in the specified module.\n\n\
         **Syntax:** `zoho.crm.createRecord(module_name, data_map, connection)`",
    ),
    (
        "searchRecords",
        "**searchRecords** - Searches for records based on criteria.\n\n\
         **Syntax:** `zoho.crm.searchRecords(module_name, criteria, connection)`",
    ),
    (
        "info",
        "**info** - Logs information to the execution log.\n\n\
         **Syntax:** `info message;`",
    ),
    (
        "sendmail",
        "**sendmail** - Sends an email.\n\n\
         **Syntax:** `sendmail [from: ... to: ... subject: ... message: ...]`",
    ),
    (
        "invokeurl",
        "**invokeurl** - Makes HTTP requests to external services.\n\n\
         **Syntax:** `invokeurl [url: ... type: ... parameters: ... connection: ...]`",
    ),
];

/// Markdown documentation for `word`, if it is a documented identifier.
pub fn lookup_hover(word: &str) -> Option<&'static str> {
    HOVER_DOCS
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, doc)| *doc)
}

/// Identifiers that have hover documentation, in authored order.
pub fn documented_words() -> impl Iterator<Item = &'static str> {
    HOVER_DOCS.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn get_records_mentions_crm_syntax() {
        let doc = lookup_hover("getRecords").expect("getRecords is documented");
        assert!(doc.contains("zoho.crm.getRecords"));
        assert!(doc.starts_with("**getRecords**"));
    }

    #[rstest]
    #[case::unknown("doesNotExist")]
    #[case::empty("")]
    #[case::wrong_case("GetRecords")]
    #[case::namespaced("zoho.crm.getRecords")]
    #[case::keyword_without_docs("if")]
    fn unknown_words_have_no_docs(#[case] word: &str) {
        assert_eq!(lookup_hover(word), None);
    }

    #[test]
    fn every_documented_word_resolves() {
        let words: Vec<&str> = documented_words().collect();
        assert_eq!(
            words,
            [
                "getRecords",
                "createRecord",
                "searchRecords",
                "info",
                "sendmail",
                "invokeurl"
            ]
        );
        for word in words {
            let doc = lookup_hover(word).expect("documented word resolves");
            assert!(doc.contains("**Syntax:**"), "{word} lacks a syntax line");
        }
    }

    #[test]
    fn line_continuations_keep_the_paragraph_break() {
        let doc = lookup_hover("info").expect("info is documented");
        assert_eq!(
            doc,
            "**info** - Logs information to the execution log.\n\n**Syntax:** `info message;`"
        );
    }
}
