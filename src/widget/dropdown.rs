use crate::node;
use serde::Deserialize;
use std::fmt::{self, Write as _};

/// Stylesheet for the widget. Keyed to the `.my-dropdown` container class,
/// the `.items` list class, and the `data-open` state attribute; a closed
/// container (`data-open="false"`) hides its item list.
pub const CSS: &str = include_str!("dropdown.css");

/// Client-side behavior. On load it finds every `.my-dropdown` container,
/// looks up its `[data-toggle]` control, and attaches a click handler that
/// flips `data-open` between `"true"` and `"false"`.
pub const JS: &str = include_str!("dropdown.js");

#[derive(Debug, Clone, Deserialize)]
pub struct Dropdown {
    /// Label of the synthesized root entry, linked to `/`.
    pub title:     String,
    /// Remaining entries, rendered top-to-bottom in this order.
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub text: String,
}

/// Render the dropdown as an HTML fragment: a closed `.my-dropdown`
/// container holding a `[data-toggle]` button and the entry list, root
/// entry first.
///
/// Values are interpolated verbatim, with no escaping: the caller supplies
/// trusted labels and paths (here they come from the operator's own config
/// file). Do not feed this request-derived text.
pub fn render(dropdown: &Dropdown) -> String {
    let mut items = String::new();
    writeln!(items).unwrap();
    writeln!(items, "{}", nav_item("/", &dropdown.title)).unwrap();
    for item in &dropdown.nav_items {
        writeln!(items, "{}", nav_item(&item.href, &item.text)).unwrap();
    }

    let items = &items;
    node! { div, class = "my-dropdown", "data-open" = "false" =>
        node! { button, class = "button", "data-toggle" = "" => "Toggle" },
        node! { ul, class = "items" => items },
    }
    .to_string()
}

fn nav_item<'a>(href: &'a str, text: &'a str) -> impl fmt::Display + 'a {
    node! { li => node! { a, href = href => text } }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(title: &str, items: &[(&str, &str)]) -> Dropdown {
        Dropdown {
            title:     title.to_string(),
            nav_items: items
                .iter()
                .map(|&(href, text)| NavItem {
                    href: href.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_nav_renders_only_the_root_entry() {
        let html = render(&nav("Home", &[]));
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains(r#"<li><a href="/">Home</a></li>"#));
    }

    #[test]
    fn entry_count_is_items_plus_root() {
        let html = render(&nav("Home", &[("/a", "A"), ("/b", "B"), ("/c", "C")]));
        assert_eq!(html.matches("<li>").count(), 4);
        assert_eq!(html.matches("</li>").count(), 4);
    }

    #[test]
    fn root_entry_comes_first_and_order_is_preserved() {
        let html = render(&nav(
            "Home",
            &[("/about", "About"), ("/contact", "Contact")],
        ));
        let home = html.find(r#"<a href="/">Home</a>"#).unwrap();
        let about = html.find(r#"<a href="/about">About</a>"#).unwrap();
        let contact = html.find(r#"<a href="/contact">Contact</a>"#).unwrap();
        assert!(home < about);
        assert!(about < contact);
    }

    #[test]
    fn container_starts_closed_with_a_toggle() {
        let html = render(&nav("Home", &[("/about", "About")]));
        assert!(html.starts_with(r#"<div class="my-dropdown" data-open="false">"#));
        assert!(!html.contains(r#"data-open="true""#));
        assert!(html.contains("data-toggle"));
        assert!(html.contains(r#"<ul class="items">"#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let dropdown = nav("Home", &[("/about", "About"), ("/contact", "Contact")]);
        assert_eq!(render(&dropdown), render(&dropdown));
    }

    #[test]
    fn values_pass_through_verbatim() {
        let html = render(&nav("A & B", &[("/x?y=1", "<em>x</em>")]));
        assert!(html.contains(r#"<a href="/x?y=1"><em>x</em></a>"#));
        assert!(html.contains(r#"<a href="/">A & B</a>"#));
    }

    #[test]
    fn assets_agree_on_the_naming_contract() {
        for blob in [CSS, JS] {
            assert!(blob.contains("my-dropdown"));
        }
        assert!(CSS.contains(r#"[data-open="false"]"#));
        assert!(JS.contains("[data-toggle]"));
        assert!(JS.contains(r#""true""#) && JS.contains(r#""false""#));
    }
}
