//! Syntax highlighting seam.
//!
//! Highlighting is a collaborator concern: the renderer only hands over
//! `(code, language)` and embeds whatever comes back. The trait keeps the
//! renderer pure and lets applications plug in their own engine; the crate
//! ships a no-op fallback and, behind the `syntect-highlight` feature, a
//! syntect-backed implementation.

/// Output of a highlighting pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Highlighted {
    /// A pre-rendered HTML fragment.
    Html(String),
    /// No markup applied; display as-is in a monospace context.
    Plain(String),
}

impl Highlighted {
    /// The underlying text, markup or not.
    pub fn as_str(&self) -> &str {
        match self {
            Highlighted::Html(s) | Highlighted::Plain(s) => s,
        }
    }
}

/// Turns code into display-ready output.
///
/// Implementations must be pure and fall back to plain text for languages
/// they do not know.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: &str) -> Highlighted;
}

/// The no-op highlighter: hands the code back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: &str) -> Highlighted {
        Highlighted::Plain(code.to_string())
    }
}

#[cfg(feature = "syntect-highlight")]
pub use self::syntect_impl::SyntectHighlighter;

#[cfg(feature = "syntect-highlight")]
mod syntect_impl {
    use super::{Highlighted, Highlighter};
    use once_cell::sync::Lazy;
    use syntect::highlighting::ThemeSet;
    use syntect::parsing::SyntaxSet;

    static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
    static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

    /// Syntect-backed highlighter producing inline-styled HTML.
    #[derive(Debug, Clone)]
    pub struct SyntectHighlighter {
        theme: String,
    }

    impl SyntectHighlighter {
        pub fn new() -> Self {
            Self::with_theme("base16-ocean.dark")
        }

        /// Use a named theme from syntect's default theme set. Unknown
        /// themes degrade to plain output rather than failing.
        pub fn with_theme(theme: impl Into<String>) -> Self {
            SyntectHighlighter {
                theme: theme.into(),
            }
        }
    }

    impl Default for SyntectHighlighter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Highlighter for SyntectHighlighter {
        fn highlight(&self, code: &str, language: &str) -> Highlighted {
            let Some(theme) = THEMES.themes.get(&self.theme) else {
                return Highlighted::Plain(code.to_string());
            };
            let syntax = SYNTAXES
                .find_syntax_by_token(language)
                .or_else(|| SYNTAXES.find_syntax_by_extension(language));
            match syntax {
                Some(syntax) => {
                    match syntect::html::highlighted_html_for_string(code, &SYNTAXES, syntax, theme)
                    {
                        Ok(html) => Highlighted::Html(html),
                        Err(_) => Highlighted::Plain(code.to_string()),
                    }
                }
                None => Highlighted::Plain(code.to_string()),
            }
        }
    }
}
