use indexmap::IndexMap;

use crate::MenuItem;

/// Anchor attributes in emission order.
///
/// Insertion order is kept by the map and is exactly the order the
/// attributes end up in the markup; overriding an existing key (the toggle
/// and disabled rules both override `href`) keeps its original position.
pub type Attributes = IndexMap<String, String>;

/// Transform for a computed class list. The returned list replaces the
/// computed one.
pub type ClassHook<'a, Identifier> =
    Box<dyn Fn(Vec<String>, &MenuItem<Identifier>, usize) -> Vec<String> + 'a>;

/// Transform for the full anchor attribute map of one item.
pub type AttributeHook<'a, Identifier> =
    Box<dyn Fn(Attributes, &MenuItem<Identifier>, usize) -> Attributes + 'a>;

/// Transform for a single string value (title or assembled fragment).
pub type TextHook<'a, Identifier> =
    Box<dyn Fn(String, &MenuItem<Identifier>, usize) -> String + 'a>;

/// Whitespace handling of the generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSpacing {
    /// Indent sub-menu containers with tabs and separate structural
    /// elements with newlines.
    #[default]
    Preserve,
    /// Emit no whitespace padding at all.
    Discard,
}

impl ItemSpacing {
    /// The `(tab, newline)` pair every emitted fragment is padded with.
    pub(crate) const fn symbols(self) -> (&'static str, &'static str) {
        match self {
            Self::Preserve => ("\t", "\n"),
            Self::Discard => ("", ""),
        }
    }
}

/// Per-render configuration.
///
/// Everything defaults to "off": normal spacing, no wrapper texts, no
/// container attributes, and every hook the identity.
///
/// The hooks let a caller observe and modify each computed value right
/// before it is finalized, mirroring the extension points of the classic
/// theme-framework walkers but as plain optional closures instead of a
/// global name-keyed filter registry.
pub struct RenderOptions<'a, Identifier> {
    pub(crate) item_spacing: ItemSpacing,
    pub(crate) before: &'a str,
    pub(crate) after: &'a str,
    pub(crate) link_before: &'a str,
    pub(crate) link_after: &'a str,
    pub(crate) container: Option<&'a str>,
    pub(crate) container_id: Option<&'a str>,
    pub(crate) container_class: Option<&'a str>,
    pub(crate) menu_id: Option<&'a str>,
    pub(crate) menu_class: Option<&'a str>,
    pub(crate) item_class_hook: Option<ClassHook<'a, Identifier>>,
    pub(crate) submenu_class_hook: Option<ClassHook<'a, Identifier>>,
    pub(crate) attribute_hook: Option<AttributeHook<'a, Identifier>>,
    pub(crate) title_hook: Option<TextHook<'a, Identifier>>,
    pub(crate) fragment_hook: Option<TextHook<'a, Identifier>>,
}

impl<Identifier> Default for RenderOptions<'_, Identifier> {
    fn default() -> Self {
        Self {
            item_spacing: ItemSpacing::default(),
            before: "",
            after: "",
            link_before: "",
            link_after: "",
            container: None,
            container_id: None,
            container_class: None,
            menu_id: None,
            menu_class: None,
            item_class_hook: None,
            submenu_class_hook: None,
            attribute_hook: None,
            title_hook: None,
            fragment_hook: None,
        }
    }
}

impl<Identifier> core::fmt::Debug for RenderOptions<'_, Identifier> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.debug_struct("RenderOptions")
            .field("item_spacing", &self.item_spacing)
            .field("before", &self.before)
            .field("after", &self.after)
            .field("link_before", &self.link_before)
            .field("link_after", &self.link_after)
            .field("container", &self.container)
            .field("hooks", &"..")
            .finish_non_exhaustive()
    }
}

impl<'a, Identifier> RenderOptions<'a, Identifier> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn item_spacing(mut self, item_spacing: ItemSpacing) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    /// Text emitted immediately before each item's anchor.
    #[must_use]
    pub fn before(mut self, before: &'a str) -> Self {
        self.before = before;
        self
    }

    /// Text emitted immediately after each item's anchor.
    #[must_use]
    pub fn after(mut self, after: &'a str) -> Self {
        self.after = after;
        self
    }

    /// Text emitted inside the anchor, before the title.
    #[must_use]
    pub fn link_before(mut self, link_before: &'a str) -> Self {
        self.link_before = link_before;
        self
    }

    /// Text emitted inside the anchor, after the title.
    #[must_use]
    pub fn link_after(mut self, link_after: &'a str) -> Self {
        self.link_after = link_after;
        self
    }

    /// Tag name of the element wrapped around the fallback output.
    ///
    /// Only consumed by [`render_fallback`](crate::render_fallback).
    #[must_use]
    pub fn container(mut self, container: &'a str) -> Self {
        self.container = Some(container);
        self
    }

    /// `id` of the fallback container element.
    #[must_use]
    pub fn container_id(mut self, container_id: &'a str) -> Self {
        self.container_id = Some(container_id);
        self
    }

    /// `class` of the fallback container element.
    #[must_use]
    pub fn container_class(mut self, container_class: &'a str) -> Self {
        self.container_class = Some(container_class);
        self
    }

    /// `id` of the fallback menu list element.
    #[must_use]
    pub fn menu_id(mut self, menu_id: &'a str) -> Self {
        self.menu_id = Some(menu_id);
        self
    }

    /// `class` of the fallback menu list element.
    #[must_use]
    pub fn menu_class(mut self, menu_class: &'a str) -> Self {
        self.menu_class = Some(menu_class);
        self
    }

    /// Transform the computed item wrapper class list.
    ///
    /// Invoked for every item at every depth, even though only depth 0
    /// emits the wrapper the list is rendered into.
    #[must_use]
    pub fn item_class_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<String>, &MenuItem<Identifier>, usize) -> Vec<String> + 'a,
    {
        self.item_class_hook = Some(Box::new(hook));
        self
    }

    /// Transform the computed sub-menu container class list.
    #[must_use]
    pub fn submenu_class_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<String>, &MenuItem<Identifier>, usize) -> Vec<String> + 'a,
    {
        self.submenu_class_hook = Some(Box::new(hook));
        self
    }

    /// Transform the computed anchor attribute map.
    #[must_use]
    pub fn attribute_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Attributes, &MenuItem<Identifier>, usize) -> Attributes + 'a,
    {
        self.attribute_hook = Some(Box::new(hook));
        self
    }

    /// Transform the raw title before it is escaped and embedded.
    #[must_use]
    pub fn title_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &MenuItem<Identifier>, usize) -> String + 'a,
    {
        self.title_hook = Some(Box::new(hook));
        self
    }

    /// Transform the fully assembled per-item fragment before it is
    /// appended to the output.
    #[must_use]
    pub fn fragment_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &MenuItem<Identifier>, usize) -> String + 'a,
    {
        self.fragment_hook = Some(Box::new(hook));
        self
    }

    pub(crate) const fn spacing_symbols(&self) -> (&'static str, &'static str) {
        self.item_spacing.symbols()
    }

    pub(crate) fn filter_item_classes(
        &self,
        classes: Vec<String>,
        item: &MenuItem<Identifier>,
        depth: usize,
    ) -> Vec<String> {
        match &self.item_class_hook {
            Some(hook) => hook(classes, item, depth),
            None => classes,
        }
    }

    pub(crate) fn filter_submenu_classes(
        &self,
        classes: Vec<String>,
        parent: &MenuItem<Identifier>,
        depth: usize,
    ) -> Vec<String> {
        match &self.submenu_class_hook {
            Some(hook) => hook(classes, parent, depth),
            None => classes,
        }
    }

    pub(crate) fn filter_attributes(
        &self,
        attributes: Attributes,
        item: &MenuItem<Identifier>,
        depth: usize,
    ) -> Attributes {
        match &self.attribute_hook {
            Some(hook) => hook(attributes, item, depth),
            None => attributes,
        }
    }

    pub(crate) fn filter_title(
        &self,
        title: String,
        item: &MenuItem<Identifier>,
        depth: usize,
    ) -> String {
        match &self.title_hook {
            Some(hook) => hook(title, item, depth),
            None => title,
        }
    }

    pub(crate) fn filter_fragment(
        &self,
        fragment: String,
        item: &MenuItem<Identifier>,
        depth: usize,
    ) -> String {
        match &self.fragment_hook {
            Some(hook) => hook(fragment, item, depth),
            None => fragment,
        }
    }
}

#[test]
fn spacing_symbols_match_mode() {
    assert_eq!(ItemSpacing::Preserve.symbols(), ("\t", "\n"));
    assert_eq!(ItemSpacing::Discard.symbols(), ("", ""));
}

#[test]
fn default_options_apply_identity_filters() {
    let options = RenderOptions::<u32>::default();
    let item = MenuItem::new_leaf(1, "Home");
    let classes = vec!["nav-item".to_owned()];
    assert_eq!(
        options.filter_item_classes(classes.clone(), &item, 0),
        classes
    );
    assert_eq!(
        options.filter_title("Home".to_owned(), &item, 0),
        "Home".to_owned()
    );
}
