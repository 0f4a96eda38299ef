//! HTML list rendering for drawn menus.

use std::fmt::Write;

use crate::assemble::ItemClass;
use crate::tree::MenuTree;

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render a drawn menu as an HTML fragment.
///
/// Each level becomes one `<ul>`; the current item is rendered without a
/// link. An empty tree renders as an empty string.
#[must_use]
pub fn render_html(tree: &MenuTree) -> String {
    if tree.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    writeln!(
        out,
        r#"<nav class="menu" id="menu-{}">"#,
        escape_html(&tree.menu_name)
    )
    .unwrap();

    for level in &tree.levels {
        writeln!(
            out,
            r#"<ul class="menu-level" data-level="{}">"#,
            level.level
        )
        .unwrap();
        for entry in &level.items {
            let name = escape_html(&entry.name);
            if entry.class == ItemClass::Current {
                writeln!(out, r#"<li class="current">{name}</li>"#).unwrap();
            } else {
                writeln!(
                    out,
                    r#"<li class="{}"><a href="{}">{name}</a></li>"#,
                    entry.class.as_str(),
                    escape_html(&entry.url)
                )
                .unwrap();
            }
        }
        out.push_str("</ul>\n");
    }

    out.push_str("</nav>\n");
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::{Diagnostic, DiagnosticKind, Level, MenuEntry};

    fn entry(id: u64, name: &str, url: &str, class: ItemClass, level: i32) -> MenuEntry {
        MenuEntry {
            id,
            parent_id: None,
            name: name.to_owned(),
            url: url.to_owned(),
            class,
            order: 0,
            level,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_levels() {
        let tree = MenuTree {
            menu_name: "main".to_owned(),
            levels: vec![
                Level {
                    level: -1,
                    items: vec![entry(1, "Index", "/", ItemClass::Selected, -1)],
                },
                Level {
                    level: 0,
                    items: vec![
                        entry(3, "I3", "/i3", ItemClass::Current, 0),
                        entry(32, "I32", "/i32", ItemClass::Neighbour, 0),
                    ],
                },
            ],
            warnings: Vec::new(),
            diagnostic: None,
        };

        let html = render_html(&tree);

        assert_eq!(
            html,
            concat!(
                "<nav class=\"menu\" id=\"menu-main\">\n",
                "<ul class=\"menu-level\" data-level=\"-1\">\n",
                "<li class=\"selected\"><a href=\"/\">Index</a></li>\n",
                "</ul>\n",
                "<ul class=\"menu-level\" data-level=\"0\">\n",
                "<li class=\"current\">I3</li>\n",
                "<li class=\"neighbour\"><a href=\"/i32\">I32</a></li>\n",
                "</ul>\n",
                "</nav>\n",
            )
        );
    }

    #[test]
    fn test_render_escapes_names_and_urls() {
        let tree = MenuTree {
            menu_name: "main".to_owned(),
            levels: vec![Level {
                level: 0,
                items: vec![
                    entry(1, "Home", "/", ItemClass::Current, 0),
                    entry(2, "<b>Q&A</b>", "/qa?a=1&b=2", ItemClass::Root, 0),
                ],
            }],
            warnings: Vec::new(),
            diagnostic: None,
        };

        let html = render_html(&tree);

        assert!(html.contains(
            r#"<li class="root"><a href="/qa?a=1&amp;b=2">&lt;b&gt;Q&amp;A&lt;/b&gt;</a></li>"#
        ));
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = MenuTree::empty(
            "main",
            Diagnostic {
                kind: DiagnosticKind::EmptyMenu,
                message: "menu 'main' has no items".to_owned(),
            },
        );

        assert_eq!(render_html(&tree), "");
    }
}
