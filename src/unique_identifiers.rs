use std::collections::HashSet;
use std::io::ErrorKind;

use crate::MenuItem;

fn inner<Identifier>(items: &[MenuItem<Identifier>], error: &'static str) -> std::io::Result<()>
where
    Identifier: PartialEq + Eq + core::hash::Hash,
{
    let identifiers = items
        .iter()
        .map(MenuItem::identifier)
        .collect::<HashSet<_>>();
    if identifiers.len() == items.len() {
        Ok(())
    } else {
        Err(std::io::Error::new(ErrorKind::AlreadyExists, error))
    }
}

/// Ensures that the identifiers of all root items are unique.
#[track_caller]
pub(crate) fn tree<Identifier>(items: &[MenuItem<Identifier>]) -> std::io::Result<()>
where
    Identifier: PartialEq + Eq + core::hash::Hash,
{
    inner(items, "The items contain duplicate identifiers")
}

/// Ensures that the identifiers of all children are unique.
#[track_caller]
pub(crate) fn children<Identifier>(children: &[MenuItem<Identifier>]) -> std::io::Result<()>
where
    Identifier: PartialEq + Eq + core::hash::Hash,
{
    inner(children, "The children contain duplicate identifiers")
}

/// Ensures that the to be added child identifier does not exist in the already existing children.
#[track_caller]
pub(crate) fn add_child<Identifier>(
    existing_children: &[MenuItem<Identifier>],
    add: &MenuItem<Identifier>,
) -> std::io::Result<()>
where
    Identifier: PartialEq + Eq + core::hash::Hash,
{
    let add_identifier = add.identifier();
    let identifier_exists_already = existing_children
        .iter()
        .map(MenuItem::identifier)
        .any(|identifier| identifier == add_identifier);
    if identifier_exists_already {
        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            "The to be added child identifier already exists in the children",
        ))
    } else {
        Ok(())
    }
}
