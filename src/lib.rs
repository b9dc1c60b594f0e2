#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

/*!
Bootstrap navigation markup for hierarchical menus.

A menu is a tree of [`MenuItem`]s (which themselves can contain [`MenuItem`]
children to form the tree structure). [`NavMenu`] walks that tree depth-first
and emits the Bootstrap navigation convention as one markup string: top-level
items against dropdown sub-items, active and disabled state classes, and the
accessibility attributes tying each dropdown container to its toggle.

Rendering is a pure function of the tree and the [`RenderOptions`]: the tree
is read-only input, every node-derived string is routed through the
[`Escape`] collaborator, and no state survives a render call.

The convention itself is one implementation of the [`Walker`] callback seam;
[`walk`] drives any implementation over a tree, so further conventions can be
plugged in without touching the traversal.
*/

mod bootstrap;
mod escape;
mod fallback;
mod menu_item;
mod options;
mod unique_identifiers;
mod walker;

pub use crate::bootstrap::{BootstrapWalker, MENU_ITEM_ID_PREFIX, TOGGLE_ID_PREFIX};
pub use crate::escape::{Escape, HtmlEscape};
pub use crate::fallback::render_fallback;
pub use crate::menu_item::{
    MenuItem, CURRENT_ANCESTOR_CLASS, CURRENT_ITEM_CLASS, CURRENT_PARENT_CLASS, DISABLED_CLASS,
};
pub use crate::options::{
    AttributeHook, Attributes, ClassHook, ItemSpacing, RenderOptions, TextHook,
};
pub use crate::walker::{walk, Walker};

/// A navigation menu which can be rendered to markup.
///
/// Owns the root sibling items, the per-render [`RenderOptions`], and the
/// [`Escape`] collaborator (HTML entity escaping by default).
///
/// # Example
///
/// ```
/// # use bootstrap_nav_menu::{MenuItem, NavMenu};
/// let items = vec![
///     MenuItem::new_leaf("home", "Home").url("/"),
///     MenuItem::new(
///         "blog",
///         "Blog",
///         vec![MenuItem::new_leaf("tech", "Tech").url("/blog/tech")],
///     )?,
/// ];
/// let menu = NavMenu::new(items)?;
/// let html = menu.render();
/// assert!(html.contains("dropdown-toggle"));
/// assert!(html.contains(r#"href="/blog/tech""#));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct NavMenu<'a, Identifier> {
    items: Vec<MenuItem<Identifier>>,
    options: RenderOptions<'a, Identifier>,
    escape: &'a dyn Escape,
}

impl<'a, Identifier> NavMenu<'a, Identifier>
where
    Identifier: PartialEq + Eq + core::hash::Hash,
{
    /// Create a new `NavMenu`.
    ///
    /// # Errors
    ///
    /// Errors when there are duplicate identifiers in the root items.
    pub fn new(items: Vec<MenuItem<Identifier>>) -> std::io::Result<Self> {
        unique_identifiers::tree(&items)?;
        Ok(Self {
            items,
            options: RenderOptions::default(),
            escape: &HtmlEscape,
        })
    }
}

impl<'a, Identifier> NavMenu<'a, Identifier> {
    #[must_use]
    pub fn options(mut self, options: RenderOptions<'a, Identifier>) -> Self {
        self.options = options;
        self
    }

    /// Replace the escaping collaborator.
    #[must_use]
    pub fn escape(mut self, escape: &'a dyn Escape) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem<Identifier>] {
        &self.items
    }
}

impl<Identifier> NavMenu<'_, Identifier>
where
    Identifier: core::fmt::Display,
{
    /// Render the menu to one markup string.
    ///
    /// The traversal state lives entirely on the call stack, so rendering
    /// takes `&self` and concurrent renders of the same menu are fine.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(self.items.len() * 128);
        let mut walker = BootstrapWalker::new(&self.options, self.escape);
        walk(&mut walker, &self.items, &mut output);
        output
    }

    /// Render the "no menu configured" screen with this menu's options and
    /// escaping collaborator. See [`render_fallback`].
    #[must_use]
    pub fn fallback(&self, can_manage: bool, manage_url: &str) -> String {
        render_fallback(&self.options, self.escape, can_manage, manage_url)
    }
}

impl<Identifier: core::fmt::Debug> core::fmt::Debug for NavMenu<'_, Identifier> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.debug_struct("NavMenu")
            .field("items", &self.items)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[test]
#[should_panic = "duplicate identifiers"]
fn nav_menu_new_errors_with_duplicate_identifiers() {
    let item = MenuItem::new_leaf("same", "Same");
    let another = item.clone();
    NavMenu::new(vec![item, another]).unwrap();
}

#[test]
fn render_works_with_a_custom_escape_collaborator() {
    struct Verbatim;
    impl Escape for Verbatim {
        fn attribute(&self, value: &str) -> String {
            value.to_owned()
        }
        fn url(&self, value: &str) -> String {
            value.to_owned()
        }
        fn text(&self, value: &str) -> String {
            value.to_owned()
        }
    }

    let items = vec![MenuItem::new_leaf("raw", "a & b").url("/x?a=1&b=2")];
    let html = NavMenu::new(items).unwrap().escape(&Verbatim).render();
    assert!(html.contains(">a & b</a>"));
    assert!(html.contains(r#"href="/x?a=1&b=2""#));
}
