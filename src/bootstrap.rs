use core::fmt::Write as _;

use crate::escape::Escape;
use crate::menu_item::MenuItem;
use crate::options::{Attributes, RenderOptions};
use crate::walker::Walker;

/// Prefix of the generated item wrapper ids and sub-item anchor ids.
pub const MENU_ITEM_ID_PREFIX: &str = "menu-item-";

/// Prefix of the generated dropdown toggle anchor ids.
///
/// The sub-menu container of an item references this id through its
/// `aria-labelledby` attribute.
pub const TOGGLE_ID_PREFIX: &str = "navbar-dropdown-menu-link-";

/// The Bootstrap navigation convention as a [`Walker`].
///
/// Top-level items become `li.nav-item` wrappers with `a.nav-link` anchors.
/// A top-level item with children becomes a dropdown: its anchor turns into
/// the toggle (`dropdown-toggle`, `aria-haspopup`, href suppressed to `#`)
/// and the children land in a `div.sub-menu.dropdown-menu` container
/// labelled by the toggle's id. Items below depth 0 are plain
/// `a.dropdown-item` anchors regardless of how deep they sit.
pub struct BootstrapWalker<'a, Identifier> {
    options: &'a RenderOptions<'a, Identifier>,
    escape: &'a dyn Escape,
}

impl<'a, Identifier> BootstrapWalker<'a, Identifier> {
    #[must_use]
    pub const fn new(options: &'a RenderOptions<'a, Identifier>, escape: &'a dyn Escape) -> Self {
        Self { options, escape }
    }
}

/// Append `class` to the `class` entry, creating it when absent.
fn append_class(attributes: &mut Attributes, class: &str) {
    if let Some(existing) = attributes.get_mut("class") {
        if !existing.is_empty() {
            existing.push(' ');
        }
        existing.push_str(class);
    } else {
        attributes.insert("class".to_owned(), class.to_owned());
    }
}

impl<Identifier> Walker<Identifier> for BootstrapWalker<'_, Identifier>
where
    Identifier: core::fmt::Display,
{
    #[allow(clippy::too_many_lines)]
    fn start_item(&mut self, output: &mut String, item: &MenuItem<Identifier>, depth: usize) {
        // Item wrapper class list. Computed for every depth even though the
        // wrapper itself only exists at depth 0: the hook contract exposes
        // the list for every item.
        let mut classes = item.get_classes().to_vec();
        classes.push(format!("{MENU_ITEM_ID_PREFIX}{}", item.identifier()));
        classes.push("nav-item".to_owned());
        if item.is_current() || item.is_current_ancestor() {
            classes.push("active".to_owned());
        }
        if item.has_children() {
            classes.push("dropdown".to_owned());
        }
        classes.retain(|class| !class.is_empty());
        let classes = self.options.filter_item_classes(classes, item, depth);
        let class_names = classes.join(" ");

        // The wrapper is only emitted for top-level items.
        if depth == 0 {
            let _ = write!(
                output,
                r#"<li id="{}""#,
                self.escape
                    .attribute(&format!("{MENU_ITEM_ID_PREFIX}{}", item.identifier()))
            );
            if !class_names.is_empty() {
                let _ = write!(output, r#" class="{}""#, self.escape.attribute(&class_names));
            }
            output.push('>');
        }

        let mut attributes = Attributes::new();
        attributes.insert(
            "title".to_owned(),
            item.get_tooltip().unwrap_or_default().to_owned(),
        );
        attributes.insert(
            "target".to_owned(),
            item.get_target().unwrap_or_default().to_owned(),
        );
        attributes.insert(
            "rel".to_owned(),
            item.get_rel().unwrap_or_default().to_owned(),
        );
        attributes.insert(
            "href".to_owned(),
            item.get_url().unwrap_or_default().to_owned(),
        );

        if depth == 0 {
            attributes.insert("class".to_owned(), "nav-link".to_owned());
        }
        if depth == 0 && item.has_children() {
            // The anchor of a dropdown owner is the toggle, never a link.
            append_class(&mut attributes, "dropdown-toggle");
            attributes.insert("data-toggle".to_owned(), "dropdown".to_owned());
            attributes.insert(
                "id".to_owned(),
                format!("{TOGGLE_ID_PREFIX}{}", item.identifier()),
            );
            attributes.insert("aria-haspopup".to_owned(), "true".to_owned());
            attributes.insert("aria-expanded".to_owned(), "false".to_owned());
            attributes.insert("href".to_owned(), "#".to_owned());
        }
        if depth > 0 {
            attributes.insert("class".to_owned(), "dropdown-item".to_owned());
            attributes.insert(
                "id".to_owned(),
                format!("{MENU_ITEM_ID_PREFIX}{}", item.identifier()),
            );
        }
        if item.is_current() {
            append_class(&mut attributes, "active");
        }
        if item.is_disabled() {
            append_class(&mut attributes, "disabled");
        }

        let attributes = self.options.filter_attributes(attributes, item, depth);

        // Disabled beats every other href computation, hooks included.
        let disabled = item.is_disabled();
        let mut serialized = String::new();
        for (name, value) in &attributes {
            if value.is_empty() {
                continue;
            }
            let escaped = if name == "href" {
                self.escape.url(if disabled { "#" } else { value })
            } else {
                self.escape.attribute(value)
            };
            let _ = write!(serialized, r#" {name}="{escaped}""#);
        }

        let title = self
            .options
            .filter_title(item.title().to_owned(), item, depth);
        let title = self.escape.text(&title);

        let mut fragment = String::with_capacity(
            serialized.len() + title.len() + self.options.before.len() + self.options.after.len() + 16,
        );
        fragment.push_str(self.options.before);
        fragment.push_str("<a");
        fragment.push_str(&serialized);
        fragment.push('>');
        fragment.push_str(self.options.link_before);
        fragment.push_str(&title);
        fragment.push_str(self.options.link_after);
        fragment.push_str("</a>");
        fragment.push_str(self.options.after);
        let fragment = self.options.filter_fragment(fragment, item, depth);
        output.push_str(&fragment);
    }

    fn end_item(&mut self, output: &mut String, _item: &MenuItem<Identifier>, depth: usize) {
        if depth == 0 {
            let (_, newline) = self.options.spacing_symbols();
            output.push_str("</li>");
            output.push_str(newline);
        }
    }

    fn start_level(&mut self, output: &mut String, parent: &MenuItem<Identifier>, depth: usize) {
        let (tab, newline) = self.options.spacing_symbols();

        let classes = vec!["sub-menu".to_owned(), "dropdown-menu".to_owned()];
        let classes = self.options.filter_submenu_classes(classes, parent, depth);
        let class_names = classes.join(" ");

        output.push_str(newline);
        output.push_str(&tab.repeat(depth));
        output.push_str("<div");
        if !class_names.is_empty() {
            let _ = write!(output, r#" class="{}""#, self.escape.attribute(&class_names));
        }
        let _ = write!(
            output,
            r#" aria-labelledby="{}">"#,
            self.escape
                .attribute(&format!("{TOGGLE_ID_PREFIX}{}", parent.identifier()))
        );
        output.push_str(newline);
    }

    fn end_level(&mut self, output: &mut String, _parent: &MenuItem<Identifier>, depth: usize) {
        let (tab, newline) = self.options.spacing_symbols();
        output.push_str(&tab.repeat(depth));
        output.push_str("</div>");
        output.push_str(newline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu_item::{
        CURRENT_ANCESTOR_CLASS, CURRENT_ITEM_CLASS, CURRENT_PARENT_CLASS, DISABLED_CLASS,
    };
    use crate::options::ItemSpacing;
    use crate::{HtmlEscape, NavMenu};

    #[track_caller]
    fn render(items: Vec<MenuItem<&'static str>>) -> String {
        NavMenu::new(items)
            .expect("all item identifiers are unique")
            .render()
    }

    /// Every opened tag must be closed in reverse order; nothing emitted
    /// here is a void element.
    #[track_caller]
    fn assert_balanced(html: &str) {
        let mut stack = Vec::new();
        let mut rest = html;
        while let Some(start) = rest.find('<') {
            rest = &rest[start + 1..];
            let end = rest.find('>').expect("unterminated tag");
            let tag = &rest[..end];
            rest = &rest[end + 1..];
            if let Some(closing) = tag.strip_prefix('/') {
                assert_eq!(stack.pop(), Some(closing), "mismatched closing tag");
            } else {
                let name = tag.split(' ').next().expect("tag name");
                stack.push(name);
            }
        }
        assert!(stack.is_empty(), "unclosed tags: {stack:?}");
    }

    #[test]
    fn worked_example_matches_expected_markup() {
        let items = vec![
            MenuItem::new(
                "company",
                "Company",
                vec![MenuItem::new_leaf("about", "About")
                    .url("/about")
                    .class(CURRENT_ITEM_CLASS)],
            )
            .unwrap()
            .url("/company"),
            MenuItem::new_leaf("pricing", "Pricing").url("/pricing"),
        ];
        let html = render(items);
        let expected = concat!(
            r#"<li id="menu-item-company" class="menu-item-company nav-item dropdown">"#,
            r##"<a href="#" class="nav-link dropdown-toggle" data-toggle="dropdown" id="navbar-dropdown-menu-link-company" aria-haspopup="true" aria-expanded="false">Company</a>"##,
            "\n",
            r#"<div class="sub-menu dropdown-menu" aria-labelledby="navbar-dropdown-menu-link-company">"#,
            "\n",
            r#"<a href="/about" class="dropdown-item active" id="menu-item-about">About</a>"#,
            "</div>\n",
            "</li>\n",
            r#"<li id="menu-item-pricing" class="menu-item-pricing nav-item">"#,
            r#"<a href="/pricing" class="nav-link">Pricing</a>"#,
            "</li>\n",
        );
        assert_eq!(html, expected);
        assert_balanced(&html);
    }

    #[test]
    fn example_output_is_balanced_and_ordered() {
        let html = render(MenuItem::example());
        assert_balanced(&html);
        let home = html.find("menu-item-home").unwrap();
        let blog = html.find("menu-item-blog").unwrap();
        let contact = html.find("menu-item-contact").unwrap();
        assert!(home < blog && blog < contact, "sibling order preserved");
    }

    #[test]
    fn childless_top_level_item_gets_no_dropdown() {
        let html = render(vec![MenuItem::new_leaf("home", "Home").url("/")]);
        assert!(!html.contains("dropdown"));
        assert!(!html.contains("<div"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn dropdown_owner_href_is_always_suppressed() {
        let items = vec![MenuItem::new(
            "docs",
            "Docs",
            vec![MenuItem::new_leaf("api", "API").url("/docs/api")],
        )
        .unwrap()
        .url("/docs")];
        let html = render(items);
        assert!(!html.contains(r#"href="/docs""#));
        assert!(html.contains(r##"<a href="#" class="nav-link dropdown-toggle""##));
        assert!(html.contains(r#"aria-haspopup="true""#));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn submenu_is_labelled_by_its_owner_at_every_depth() {
        let html = render(MenuItem::example());
        assert!(html.contains(r#"aria-labelledby="navbar-dropdown-menu-link-blog""#));
        // Nested one level deeper, still labelled by the direct owner.
        assert!(html.contains(r#"aria-labelledby="navbar-dropdown-menu-link-travel""#));
    }

    #[test]
    fn disabled_beats_current_item() {
        let items = vec![MenuItem::new_leaf("legacy", "Legacy")
            .url("/legacy")
            .class(CURRENT_ITEM_CLASS)
            .class(DISABLED_CLASS)];
        let html = render(items);
        assert!(html.contains(r#"class="nav-link active disabled""#));
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains(r#"href="/legacy""#));
    }

    #[test]
    fn disabled_override_survives_the_attribute_hook() {
        let items = vec![MenuItem::new_leaf("x", "X").url("/x").class(DISABLED_CLASS)];
        let options = RenderOptions::new().attribute_hook(|mut attributes, _item, _depth| {
            attributes.insert("href".to_owned(), "/hooked".to_owned());
            attributes
        });
        let html = NavMenu::new(items).unwrap().options(options).render();
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains("/hooked"));
    }

    #[test]
    fn ancestors_of_current_item_are_active() {
        let items = vec![MenuItem::new(
            "root",
            "Root",
            vec![MenuItem::new(
                "mid",
                "Mid",
                vec![MenuItem::new_leaf("leaf", "Leaf")
                    .url("/leaf")
                    .class(CURRENT_ITEM_CLASS)],
            )
            .unwrap()
            .class(CURRENT_PARENT_CLASS)],
        )
        .unwrap()
        .class(CURRENT_ANCESTOR_CLASS)];
        let html = render(items);
        assert!(html.contains(r#"class="current-menu-ancestor menu-item-root nav-item active dropdown""#));
        // The mid-level wrapper class list is not emitted, but its anchor
        // keeps the dropdown-item class; the active trail shows on the leaf.
        assert!(html.contains(r#"class="dropdown-item active" id="menu-item-leaf""#));
    }

    #[test]
    fn every_tagged_ancestor_level_observes_active() {
        // The wrapper list only reaches markup at depth 0; use the hook to
        // observe what deeper levels compute.
        let items = vec![MenuItem::new(
            "root",
            "Root",
            vec![MenuItem::new(
                "mid",
                "Mid",
                vec![MenuItem::new_leaf("leaf", "Leaf").class(CURRENT_ITEM_CLASS)],
            )
            .unwrap()
            .class(CURRENT_ANCESTOR_CLASS)],
        )
        .unwrap()
        .class(CURRENT_ANCESTOR_CLASS)];
        let seen = std::cell::RefCell::new(Vec::new());
        let options = RenderOptions::new().item_class_hook(|classes, item: &MenuItem<&'static str>, depth| {
            if classes.iter().any(|class| class == "active") {
                seen.borrow_mut().push((item.identifier().to_string(), depth));
            }
            classes
        });
        NavMenu::new(items).unwrap().options(options).render();
        assert_eq!(
            seen.into_inner(),
            [
                ("root".to_owned(), 0),
                ("mid".to_owned(), 1),
                ("leaf".to_owned(), 2)
            ]
        );
    }

    #[test]
    fn discard_spacing_emits_no_whitespace() {
        let options = RenderOptions::new().item_spacing(ItemSpacing::Discard);
        let html = NavMenu::new(MenuItem::example())
            .unwrap()
            .options(options)
            .render();
        assert!(!html.contains('\n'));
        assert!(!html.contains('\t'));
        assert_balanced(&html);
    }

    #[test]
    fn preserve_spacing_indents_by_owner_depth() {
        let html = render(MenuItem::example());
        // blog owns a level at depth 0, travel at depth 1.
        assert!(html.contains("\n<div class=\"sub-menu dropdown-menu\" aria-labelledby=\"navbar-dropdown-menu-link-blog\">"));
        assert!(html.contains("\n\t<div class=\"sub-menu dropdown-menu\" aria-labelledby=\"navbar-dropdown-menu-link-travel\">"));
        // Closing containers carry the owner-depth indent; the last child
        // anchor before them emits no newline of its own.
        assert!(html.contains("</a>\t</div>\n"));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let menu = NavMenu::new(MenuItem::example()).unwrap();
        assert_eq!(menu.render(), menu.render());
    }

    #[test]
    fn empty_title_renders_an_empty_anchor() {
        let html = render(vec![MenuItem::new_leaf("blank", "").url("/blank")]);
        assert!(html.contains(r#"<a href="/blank" class="nav-link"></a>"#));
    }

    #[test]
    fn missing_url_omits_href_entirely() {
        let html = render(vec![MenuItem::new_leaf("nolink", "No Link")]);
        assert!(!html.contains("href"));
        assert!(html.contains(r#"<a class="nav-link">No Link</a>"#));
    }

    #[test]
    fn optional_anchor_attributes_are_emitted_in_order() {
        let html = render(vec![MenuItem::new_leaf("docs", "Docs")
            .url("/docs")
            .tooltip("Read the docs")
            .target("_blank")
            .rel("nofollow")]);
        assert!(html.contains(
            r#"<a title="Read the docs" target="_blank" rel="nofollow" href="/docs" class="nav-link">Docs</a>"#
        ));
    }

    #[test]
    fn node_derived_text_is_escaped() {
        let html = render(vec![MenuItem::new_leaf("evil", "<script>alert(1)</script>")
            .url("/a b?q=\"x\"")
            .tooltip(r#"say "hi""#)]);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"title="say &quot;hi&quot;""#));
        assert!(html.contains(r#"href="/a%20b?q=%22x%22""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn wrapper_texts_surround_anchor_and_title() {
        let options = RenderOptions::new()
            .before("<span>")
            .after("</span>")
            .link_before("<i>")
            .link_after("</i>");
        let html = NavMenu::new(vec![MenuItem::new_leaf("home", "Home").url("/")])
            .unwrap()
            .options(options)
            .render();
        assert!(html.contains(r#"<span><a href="/" class="nav-link"><i>Home</i></a></span>"#));
    }

    #[test]
    fn title_hook_runs_before_escaping() {
        let options =
            RenderOptions::new().title_hook(|title, _item, _depth| format!("{title} <now>"));
        let html = NavMenu::new(vec![MenuItem::new_leaf("home", "Home")])
            .unwrap()
            .options(options)
            .render();
        assert!(html.contains("Home &lt;now&gt;"));
    }

    #[test]
    fn fragment_hook_sees_the_assembled_anchor() {
        let options = RenderOptions::new()
            .fragment_hook(|fragment, item, _depth| format!("<!-- {} -->{fragment}", item.identifier()));
        let html = NavMenu::new(vec![MenuItem::new_leaf("home", "Home")])
            .unwrap()
            .options(options)
            .render();
        assert!(html.contains("<!-- home --><a"));
    }

    #[test]
    fn submenu_class_hook_replaces_the_container_classes() {
        let items = vec![MenuItem::new("m", "M", vec![MenuItem::new_leaf("c", "C")]).unwrap()];
        let options = RenderOptions::new()
            .submenu_class_hook(|_classes, _parent, _depth| vec!["mega-menu".to_owned()]);
        let html = NavMenu::new(items).unwrap().options(options).render();
        assert!(html.contains(r#"<div class="mega-menu" aria-labelledby="#));
        assert!(!html.contains("sub-menu"));
    }

    #[test]
    fn item_class_hook_observes_computed_lists_below_depth_zero() {
        let items = vec![MenuItem::new("m", "M", vec![MenuItem::new_leaf("c", "C")]).unwrap()];
        let seen = std::cell::RefCell::new(Vec::new());
        let options = RenderOptions::new().item_class_hook(|classes, _item, depth| {
            seen.borrow_mut().push((depth, classes.clone()));
            classes
        });
        NavMenu::new(items).unwrap().options(options).render();
        let seen = seen.into_inner();
        assert_eq!(
            seen,
            [
                (
                    0,
                    vec![
                        "menu-item-m".to_owned(),
                        "nav-item".to_owned(),
                        "dropdown".to_owned()
                    ]
                ),
                (1, vec!["menu-item-c".to_owned(), "nav-item".to_owned()]),
            ]
        );
    }
}
