use crate::lex::{Keyword, Symbol, TokenKind};

pub trait Matcher: Copy {
    fn matches(&self, token: &TokenKind) -> bool;

    /// What the matcher expects, for error messages.
    fn describe(&self) -> String;
}

impl Matcher for Keyword {
    fn matches(&self, token: &TokenKind) -> bool {
        matches!(token, TokenKind::Keyword(keyword) if keyword == self)
    }

    fn describe(&self) -> String {
        format!("keyword '{self}'")
    }
}

impl Matcher for Symbol {
    fn matches(&self, token: &TokenKind) -> bool {
        matches!(token, TokenKind::Symbol(symbol) if symbol == self)
    }

    fn describe(&self) -> String {
        TokenKind::Symbol(*self).describe()
    }
}

impl<M: Matcher> Matcher for &[M] {
    fn matches(&self, token: &TokenKind) -> bool {
        self.iter().any(|matcher| matcher.matches(token))
    }

    fn describe(&self) -> String {
        self.iter()
            .map(Matcher::describe)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}
