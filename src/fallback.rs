use core::fmt::Write as _;

use crate::escape::Escape;
use crate::options::RenderOptions;

const FALLBACK_LABEL: &str = "Add a menu";

/// Render the "no menu configured" screen.
///
/// This is the entirely separate path shown when a menu location has
/// nothing assigned to it: a single entry pointing whoever may fix the
/// situation at `manage_url`. The capability decision stays with the
/// caller; without it the output is empty, visitors never see the hint.
///
/// Only the container-level fields of [`RenderOptions`] are consumed here
/// ([`container`](RenderOptions::container),
/// [`container_id`](RenderOptions::container_id),
/// [`container_class`](RenderOptions::container_class),
/// [`menu_id`](RenderOptions::menu_id),
/// [`menu_class`](RenderOptions::menu_class)).
#[must_use]
pub fn render_fallback<Identifier>(
    options: &RenderOptions<'_, Identifier>,
    escape: &dyn Escape,
    can_manage: bool,
    manage_url: &str,
) -> String {
    if !can_manage {
        return String::new();
    }

    let mut output = String::new();

    if let Some(container) = options.container {
        let _ = write!(output, "<{}", escape.attribute(container));
        if let Some(id) = options.container_id {
            let _ = write!(output, r#" id="{}""#, escape.attribute(id));
        }
        if let Some(class) = options.container_class {
            let _ = write!(output, r#" class="{}""#, escape.attribute(class));
        }
        output.push('>');
    }

    output.push_str("<ul");
    if let Some(id) = options.menu_id {
        let _ = write!(output, r#" id="{}""#, escape.attribute(id));
    }
    if let Some(class) = options.menu_class {
        let _ = write!(output, r#" class="{}""#, escape.attribute(class));
    }
    output.push('>');

    let _ = write!(
        output,
        r#"<li class="nav-item active"><a class="nav-link" href="{}">{}</a></li>"#,
        escape.url(manage_url),
        escape.text(FALLBACK_LABEL)
    );

    output.push_str("</ul>");

    if let Some(container) = options.container {
        let _ = write!(output, "</{}>", escape.attribute(container));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlEscape;

    #[test]
    fn without_capability_nothing_is_rendered() {
        let options = RenderOptions::<u32>::default();
        let html = render_fallback(&options, &HtmlEscape, false, "/admin/menus");
        assert!(html.is_empty());
    }

    #[test]
    fn bare_fallback_is_a_single_manage_link() {
        let options = RenderOptions::<u32>::default();
        let html = render_fallback(&options, &HtmlEscape, true, "/admin/menus");
        assert_eq!(
            html,
            r#"<ul><li class="nav-item active"><a class="nav-link" href="/admin/menus">Add a menu</a></li></ul>"#
        );
    }

    #[test]
    fn container_attributes_are_applied_when_set() {
        let options = RenderOptions::<u32>::new()
            .container("nav")
            .container_id("site-nav")
            .container_class("navbar")
            .menu_id("main-menu")
            .menu_class("navbar-nav");
        let html = render_fallback(&options, &HtmlEscape, true, "/admin/menus");
        assert!(html.starts_with(r#"<nav id="site-nav" class="navbar"><ul id="main-menu" class="navbar-nav">"#));
        assert!(html.ends_with("</ul></nav>"));
    }

    #[test]
    fn manage_url_is_escaped() {
        let options = RenderOptions::<u32>::default();
        let html = render_fallback(&options, &HtmlEscape, true, "/admin/menus?loc=a b");
        assert!(html.contains(r#"href="/admin/menus?loc=a%20b""#));
    }
}
