//! Rendered structure of the search widget
//!
//! [`SearchMarkup`] is what a renderer draws: a container, a search input,
//! and (only when something matches) a list of links. The terminal frontend
//! reads it for drawing; `Display` writes it out as an HTML fragment.

use std::borrow::Cow;
use std::fmt;

/// Input type of the search box
pub const INPUT_TYPE: &str = "search";

/// Value of the autocomplete/autocapitalize attributes
pub const ATTR_OFF: &str = "off";

/// The whole widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMarkup {
    /// Container id
    pub id: Option<String>,
    /// Container class name
    pub class_name: Option<String>,
    pub input: InputMarkup,
    /// Result links; `None` when the list is not rendered at all
    pub list: Option<Vec<LinkMarkup>>,
}

/// Attributes of the search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMarkup {
    pub input_type: &'static str,
    pub name: String,
    pub placeholder: String,
    pub value: String,
    pub spellcheck: bool,
    pub autocomplete: &'static str,
    pub autocapitalize: &'static str,
    pub auto_focus: bool,
    /// Whether the input currently holds focus
    pub focused: bool,
}

/// One result link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMarkup {
    /// Plain text of the label
    pub text: String,
    pub href: String,
    pub tab_index: i32,
    /// Whether this link currently holds focus
    pub focused: bool,
}

impl SearchMarkup {
    /// Render as an HTML fragment
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Whether the result list is part of the output
    #[must_use]
    pub const fn has_list(&self) -> bool {
        self.list.is_some()
    }

    /// Find a rendered link by its text
    #[must_use]
    pub fn link(&self, text: &str) -> Option<&LinkMarkup> {
        self.list.as_ref()?.iter().find(|link| link.text == text)
    }
}

impl fmt::Display for SearchMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<div")?;
        if let Some(id) = &self.id {
            write!(f, r#" id="{}""#, escape_html(id))?;
        }
        if let Some(class_name) = &self.class_name {
            write!(f, r#" class="{}""#, escape_html(class_name))?;
        }
        f.write_str(">")?;

        write!(f, "{}", self.input)?;

        if let Some(links) = &self.list {
            f.write_str("<ul>")?;
            for link in links {
                write!(f, "<li>{link}</li>")?;
            }
            f.write_str("</ul>")?;
        }

        f.write_str("</div>")
    }
}

impl fmt::Display for InputMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<input type="{}" name="{}" placeholder="{}" value="{}" spellcheck="{}" autocomplete="{}" autocapitalize="{}""#,
            self.input_type,
            escape_html(&self.name),
            escape_html(&self.placeholder),
            escape_html(&self.value),
            self.spellcheck,
            self.autocomplete,
            self.autocapitalize,
        )?;
        if self.auto_focus {
            f.write_str(" autofocus")?;
        }
        f.write_str(">")
    }
}

impl fmt::Display for LinkMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<a href="{}" tabindex="{}">{}</a>"#,
            escape_html(&self.href),
            self.tab_index,
            escape_html(&self.text)
        )
    }
}

fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> InputMarkup {
        InputMarkup {
            input_type: INPUT_TYPE,
            name: "q".into(),
            placeholder: "Search".into(),
            value: String::new(),
            spellcheck: false,
            autocomplete: ATTR_OFF,
            autocapitalize: ATTR_OFF,
            auto_focus: false,
            focused: false,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_input_html() {
        assert_eq!(
            input().to_string(),
            r#"<input type="search" name="q" placeholder="Search" value="" spellcheck="false" autocomplete="off" autocapitalize="off">"#
        );
    }

    #[test]
    fn test_markup_without_list() {
        let markup = SearchMarkup {
            id: Some("react-search".into()),
            class_name: None,
            input: input(),
            list: None,
        };
        let html = markup.to_html();
        assert!(html.starts_with(r#"<div id="react-search"><input"#));
        assert!(!html.contains("<ul>"));
        assert!(html.ends_with("></div>"));
    }

    #[test]
    fn test_markup_with_list() {
        let markup = SearchMarkup {
            id: None,
            class_name: Some("search".into()),
            input: InputMarkup {
                auto_focus: true,
                ..input()
            },
            list: Some(vec![LinkMarkup {
                text: "R&D".into(),
                href: "https://example.com/?a=1&b=2".into(),
                tab_index: -1,
                focused: false,
            }]),
        };
        let html = markup.to_html();
        assert!(html.contains(" autofocus>"));
        assert!(html.contains(
            r#"<ul><li><a href="https://example.com/?a=1&amp;b=2" tabindex="-1">R&amp;D</a></li></ul>"#
        ));
        assert_eq!(markup.link("R&D").map(|l| l.tab_index), Some(-1));
        assert!(markup.link("missing").is_none());
    }
}
