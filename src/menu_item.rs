/// Marker class a tree source puts on the item the visitor is currently on.
pub const CURRENT_ITEM_CLASS: &str = "current-menu-item";

/// Marker class for the direct parent of the current item.
pub const CURRENT_PARENT_CLASS: &str = "current-menu-parent";

/// Marker class for any further ancestor of the current item.
///
/// Sources that want the active trail highlighted all the way up must tag
/// every ancestor, not only the direct parent.
pub const CURRENT_ANCESTOR_CLASS: &str = "current-menu-ancestor";

/// Marker class for items that are shown but not navigable.
pub const DISABLED_CLASS: &str = "disabled";

/// One item inside a [`NavMenu`](crate::NavMenu).
///
/// Can have zero or more `children`.
///
/// # Identifier
///
/// The `Identifier` ends up inside generated markup ids (`menu-item-<id>`,
/// `navbar-dropdown-menu-link-<id>`), so it must implement [`Display`](core::fmt::Display)
/// and needs to be unique among its siblings for those ids not to collide.
/// It can be an integer database key, a slug, or anything else that fits
/// both requirements.
///
/// The `title` can be different from the `identifier`: the identifier is
/// what the markup references, the title is what the visitor reads.
///
/// # Example
///
/// ```
/// # use bootstrap_nav_menu::MenuItem;
/// let child = MenuItem::new_leaf("tech", "Tech").url("/blog/tech");
/// let parent = MenuItem::new("blog", "Blog", vec![child])?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuItem<Identifier> {
    pub(crate) identifier: Identifier,
    pub(crate) title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) tooltip: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) target: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) rel: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) classes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) children: Vec<MenuItem<Identifier>>,
}

impl<Identifier> MenuItem<Identifier>
where
    Identifier: PartialEq + Eq + core::hash::Hash,
{
    /// Create a new `MenuItem` without children.
    #[must_use]
    pub fn new_leaf<T>(identifier: Identifier, title: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            identifier,
            title: title.into(),
            url: None,
            tooltip: None,
            target: None,
            rel: None,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new `MenuItem` with children.
    ///
    /// # Errors
    ///
    /// Errors when there are duplicate identifiers in the children.
    #[track_caller]
    pub fn new<T>(
        identifier: Identifier,
        title: T,
        children: Vec<MenuItem<Identifier>>,
    ) -> std::io::Result<Self>
    where
        T: Into<String>,
    {
        crate::unique_identifiers::children(&children)?;
        Ok(Self {
            identifier,
            title: title.into(),
            url: None,
            tooltip: None,
            target: None,
            rel: None,
            classes: Vec::new(),
            children,
        })
    }

    /// Add a child to the `MenuItem`.
    ///
    /// # Errors
    ///
    /// Errors when the `identifier` of the `child` already exists in the children.
    #[track_caller]
    pub fn add_child(&mut self, child: MenuItem<Identifier>) -> std::io::Result<()> {
        crate::unique_identifiers::add_child(&self.children, &child)?;
        self.children.push(child);
        Ok(())
    }
}

impl<Identifier> MenuItem<Identifier> {
    /// Raw link target. `None` means the rendered anchor carries no `href`.
    #[must_use]
    pub fn url<T>(mut self, url: T) -> Self
    where
        T: Into<String>,
    {
        self.url = Some(url.into());
        self
    }

    /// Raw text for the anchor `title` attribute.
    #[must_use]
    pub fn tooltip<T>(mut self, tooltip: T) -> Self
    where
        T: Into<String>,
    {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Link target window (the anchor `target` attribute).
    #[must_use]
    pub fn target<T>(mut self, target: T) -> Self
    where
        T: Into<String>,
    {
        self.target = Some(target.into());
        self
    }

    /// Link relationship annotation (the anchor `rel` attribute), e.g. `nofollow`.
    #[must_use]
    pub fn rel<T>(mut self, rel: T) -> Self
    where
        T: Into<String>,
    {
        self.rel = Some(rel.into());
        self
    }

    /// Append one classification tag.
    ///
    /// Tags end up on the item wrapper class list. The marker tags
    /// ([`CURRENT_ITEM_CLASS`], [`CURRENT_PARENT_CLASS`],
    /// [`CURRENT_ANCESTOR_CLASS`], [`DISABLED_CLASS`]) additionally drive
    /// the active/disabled rendering rules.
    #[must_use]
    pub fn class<T>(mut self, class: T) -> Self
    where
        T: Into<String>,
    {
        self.classes.push(class.into());
        self
    }

    /// Replace all classification tags.
    #[must_use]
    pub fn classes<I, T>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn get_tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    #[must_use]
    pub fn get_target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    #[must_use]
    pub fn get_rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    #[must_use]
    pub fn get_classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn children(&self) -> &[MenuItem<Identifier>] {
        &self.children
    }

    /// Get a reference to a child by index.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    /// Get a mutable reference to a child by index.
    ///
    /// When you choose to change the `identifier` the generated markup ids
    /// might collide afterwards.
    #[must_use]
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Whether the source tagged this item as the one currently visited.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.has_class(CURRENT_ITEM_CLASS)
    }

    /// Whether the source tagged this item as an ancestor of the current item.
    #[must_use]
    pub fn is_current_ancestor(&self) -> bool {
        self.has_class(CURRENT_PARENT_CLASS) || self.has_class(CURRENT_ANCESTOR_CLASS)
    }

    /// Whether the source tagged this item as disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.has_class(DISABLED_CLASS)
    }
}

impl MenuItem<&'static str> {
    #[cfg(test)]
    pub(crate) fn example() -> Vec<Self> {
        vec![
            Self::new_leaf("home", "Home").url("/"),
            Self::new(
                "blog",
                "Blog",
                vec![
                    Self::new_leaf("tech", "Tech").url("/blog/tech"),
                    Self::new(
                        "travel",
                        "Travel",
                        vec![
                            Self::new_leaf("asia", "Asia").url("/blog/travel/asia"),
                            Self::new_leaf("europe", "Europe").url("/blog/travel/europe"),
                        ],
                    )
                    .expect("all item identifiers are unique")
                    .url("/blog/travel"),
                    Self::new_leaf("archive", "Archive").url("/blog/archive"),
                ],
            )
            .expect("all item identifiers are unique")
            .url("/blog"),
            Self::new_leaf("contact", "Contact").url("/contact"),
        ]
    }
}

#[test]
#[should_panic = "duplicate identifiers"]
fn menu_item_new_errors_with_duplicate_identifiers() {
    let item = MenuItem::new_leaf("same", "Same");
    let another = item.clone();
    MenuItem::new("root", "Root", vec![item, another]).unwrap();
}

#[test]
#[should_panic = "identifier already exists"]
fn menu_item_add_child_errors_with_duplicate_identifiers() {
    let item = MenuItem::new_leaf("same", "Same");
    let another = item.clone();
    let mut root = MenuItem::new("root", "Root", vec![item]).unwrap();
    root.add_child(another).unwrap();
}

#[test]
fn marker_classes_are_recognized() {
    let item = MenuItem::new_leaf(1, "Docs")
        .class(CURRENT_ITEM_CLASS)
        .class(DISABLED_CLASS);
    assert!(item.is_current());
    assert!(item.is_disabled());
    assert!(!item.is_current_ancestor());

    let parent = MenuItem::new_leaf(2, "Guides").class(CURRENT_PARENT_CLASS);
    assert!(parent.is_current_ancestor());
    let ancestor = MenuItem::new_leaf(3, "Manual").class(CURRENT_ANCESTOR_CLASS);
    assert!(ancestor.is_current_ancestor());
}

#[test]
fn optional_fields_default_to_none() {
    let item = MenuItem::new_leaf("plain", "Plain");
    assert_eq!(item.get_url(), None);
    assert_eq!(item.get_tooltip(), None);
    assert_eq!(item.get_target(), None);
    assert_eq!(item.get_rel(), None);
    assert!(item.get_classes().is_empty());
    assert!(!item.has_children());
}

#[cfg(all(test, feature = "serde"))]
#[test]
fn menu_item_deserializes_from_json() {
    let json = r#"{
        "identifier": "blog",
        "title": "Blog",
        "url": "/blog",
        "children": [
            {"identifier": "tech", "title": "Tech", "url": "/blog/tech"}
        ]
    }"#;
    let item: MenuItem<String> = serde_json::from_str(json).expect("valid menu JSON");
    assert_eq!(item.identifier(), "blog");
    assert!(item.has_children());
    assert_eq!(item.child(0).map(MenuItem::title), Some("Tech"));
}
