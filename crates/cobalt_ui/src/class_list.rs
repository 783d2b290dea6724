//! Conditional CSS class-string assembly.
//!
//! Components in this crate compute their `class` attribute from props.
//! [`ClassList`] collects class tokens in declaration order, dropping empty
//! tokens and repeats, and [`class_names`] is the one-shot form over
//! `(condition, token)` pairs.

/// Ordered collector for space-joined class strings.
#[derive(Debug, Clone, Default)]
pub struct ClassList<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ClassList<'a> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token unless it is empty or already present.
    pub fn token(mut self, token: &'a str) -> Self {
        if !token.is_empty() && !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
        self
    }

    /// Appends a token only when `condition` holds.
    pub fn token_if(self, condition: bool, token: &'a str) -> Self {
        if condition {
            self.token(token)
        } else {
            self
        }
    }

    /// Joins the collected tokens with single spaces.
    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Builds a class string from ordered `(condition, token)` pairs.
///
/// Tokens with a false condition, empty tokens, and repeated tokens are
/// filtered out; the survivors keep their declaration order.
pub fn class_names<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (bool, &'a str)>,
{
    let mut list = ClassList::new();
    for (condition, token) in pairs {
        list = list.token_if(condition, token);
    }
    list.build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn declaration_order_is_preserved() {
        let merged = class_names([
            (true, "ui-button"),
            (true, "is-active"),
            (true, "ui-button-quiet"),
        ]);
        assert_eq!(merged, "ui-button is-active ui-button-quiet");
    }

    #[test]
    fn false_conditions_and_empty_tokens_are_dropped() {
        let merged = class_names([
            (true, "ui-panel"),
            (false, "is-collapsed"),
            (true, ""),
            (true, "is-raised"),
        ]);
        assert_eq!(merged, "ui-panel is-raised");
    }

    #[test]
    fn repeated_tokens_keep_first_occurrence() {
        let merged = class_names([
            (true, "ui-card"),
            (true, "is-selected"),
            (true, "ui-card"),
        ]);
        assert_eq!(merged, "ui-card is-selected");
    }

    #[test]
    fn empty_input_builds_empty_string() {
        assert_eq!(class_names([]), "");
        assert_eq!(ClassList::new().build(), "");
    }

    #[test]
    fn builder_chains_conditionals() {
        let open = true;
        let merged = ClassList::new()
            .token("ui-sidebar")
            .token_if(open, "is-open")
            .token_if(!open, "is-closed")
            .build();
        assert_eq!(merged, "ui-sidebar is-open");
    }
}
