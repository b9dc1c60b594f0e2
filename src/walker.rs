use crate::MenuItem;

/// The four callbacks a rendering convention is built from.
///
/// [`walk`] drives a depth-first traversal over a menu tree and reports
/// every structural event to the implementation: entering and leaving one
/// item, and entering and leaving the subtree below an item with children.
/// The convention appends its markup to `output` on each event.
///
/// The level callbacks receive the item that owns the subtree together with
/// the owner's depth. This is the value the sub-menu container needs for its
/// `aria-labelledby` reference; handing it over explicitly keeps the walk
/// free of shared mutable state, so one walker can serve concurrent walks
/// of the same tree.
pub trait Walker<Identifier> {
    /// Called for every item, before its children.
    fn start_item(&mut self, output: &mut String, item: &MenuItem<Identifier>, depth: usize);

    /// Called for every item, after its children.
    fn end_item(&mut self, output: &mut String, item: &MenuItem<Identifier>, depth: usize);

    /// Called before descending into the children of `parent`.
    ///
    /// Only invoked when `parent` actually has children. `depth` is the
    /// depth of `parent`, not of the children.
    fn start_level(&mut self, output: &mut String, parent: &MenuItem<Identifier>, depth: usize);

    /// Called after all children of `parent` were visited. Matches
    /// [`start_level`](Self::start_level).
    fn end_level(&mut self, output: &mut String, parent: &MenuItem<Identifier>, depth: usize);
}

/// Depth-first pre/post-order walk over sibling items.
///
/// Sibling order is preserved, nothing is reordered or filtered. For each
/// item the callback order is `start_item`, then (when children exist)
/// `start_level`, the children recursively, `end_level`, and finally
/// `end_item`.
pub fn walk<Identifier, W>(walker: &mut W, items: &[MenuItem<Identifier>], output: &mut String)
where
    W: Walker<Identifier> + ?Sized,
{
    walk_at(walker, items, 0, output);
}

fn walk_at<Identifier, W>(
    walker: &mut W,
    items: &[MenuItem<Identifier>],
    depth: usize,
    output: &mut String,
) where
    W: Walker<Identifier> + ?Sized,
{
    for item in items {
        walker.start_item(output, item, depth);
        if item.has_children() {
            walker.start_level(output, item, depth);
            walk_at(walker, item.children(), depth + 1, output);
            walker.end_level(output, item, depth);
        }
        walker.end_item(output, item, depth);
    }
}

#[cfg(test)]
struct RecordingWalker {
    events: Vec<String>,
}

#[cfg(test)]
impl Walker<&'static str> for RecordingWalker {
    fn start_item(&mut self, _output: &mut String, item: &MenuItem<&'static str>, depth: usize) {
        self.events.push(format!("item {} @{depth}", item.identifier()));
    }

    fn end_item(&mut self, _output: &mut String, item: &MenuItem<&'static str>, depth: usize) {
        self.events.push(format!("/item {} @{depth}", item.identifier()));
    }

    fn start_level(&mut self, _output: &mut String, parent: &MenuItem<&'static str>, depth: usize) {
        self.events
            .push(format!("level {} @{depth}", parent.identifier()));
    }

    fn end_level(&mut self, _output: &mut String, parent: &MenuItem<&'static str>, depth: usize) {
        self.events
            .push(format!("/level {} @{depth}", parent.identifier()));
    }
}

#[cfg(test)]
fn record(items: &[MenuItem<&'static str>]) -> Vec<String> {
    let mut walker = RecordingWalker { events: Vec::new() };
    let mut output = String::new();
    walk(&mut walker, items, &mut output);
    assert!(output.is_empty(), "recording walker writes no markup");
    walker.events
}

#[test]
fn walk_visits_example_depth_first() {
    let events = record(&MenuItem::example());
    let expected = [
        "item home @0",
        "/item home @0",
        "item blog @0",
        "level blog @0",
        "item tech @1",
        "/item tech @1",
        "item travel @1",
        "level travel @1",
        "item asia @2",
        "/item asia @2",
        "item europe @2",
        "/item europe @2",
        "/level travel @1",
        "/item travel @1",
        "item archive @1",
        "/item archive @1",
        "/level blog @0",
        "/item blog @0",
        "item contact @0",
        "/item contact @0",
    ];
    assert_eq!(events, expected);
}

#[test]
fn walk_skips_levels_for_leaves() {
    let items = vec![MenuItem::new_leaf("only", "Only")];
    let events = record(&items);
    assert_eq!(events, ["item only @0", "/item only @0"]);
}

#[test]
fn walk_on_empty_items_is_a_no_op() {
    assert!(record(&[]).is_empty());
}
