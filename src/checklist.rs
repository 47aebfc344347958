//! Checklist cross-referencing.
//!
//! A [`Checklist`] is an ordered list of tokens that must each appear
//! somewhere in a corpus. Matching is plain, case-sensitive substring
//! containment: `/get` is satisfied by `/getall`.

/// An ordered set of required tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    tokens: Vec<String>,
}

impl Checklist {
    /// Create a checklist from tokens, keeping their order.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The tokens, in checklist order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens that do not occur in `corpus`, in checklist order.
    pub fn missing_from<'a>(&'a self, corpus: &str) -> Vec<&'a str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|token| !corpus.contains(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methods() -> Checklist {
        Checklist::new(["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"])
    }

    #[test]
    fn all_present_returns_empty() {
        let corpus = "GET POST PUT DELETE PATCH HEAD OPTIONS";
        assert!(methods().missing_from(corpus).is_empty());
    }

    #[test]
    fn none_present_returns_full_checklist() {
        let checklist = methods();
        let missing = checklist.missing_from("nothing here");
        assert_eq!(missing, checklist.tokens());
    }

    #[test]
    fn preserves_checklist_order() {
        let checklist = methods();
        let missing = checklist.missing_from("PUT HEAD");
        assert_eq!(missing, vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"]);
    }

    #[test]
    fn is_idempotent() {
        let checklist = methods();
        let corpus = "GET and DELETE";
        assert_eq!(checklist.missing_from(corpus), checklist.missing_from(corpus));
    }

    #[test]
    fn substring_match_is_permissive() {
        let checklist = Checklist::new(["/get"]);
        assert!(checklist.missing_from("\"/getall\"").is_empty());
    }

    #[test]
    fn match_is_case_sensitive() {
        let checklist = Checklist::new(["GET"]);
        assert_eq!(checklist.missing_from("get"), vec!["GET"]);
    }

    #[test]
    fn empty_checklist_is_satisfied() {
        let checklist = Checklist::new(Vec::<String>::new());
        assert!(checklist.missing_from("").is_empty());
    }
}
