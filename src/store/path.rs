use std::collections::{HashMap, HashSet};

use crate::model::repository::Folder;

/// builds the materialized path of a folder named `name` whose parent's path is `parent_path`.
/// The root's path is empty, so its children come out as `/name`
pub fn compute_path(parent_path: Option<&str>, name: &str) -> String {
    match parent_path {
        None | Some("") | Some("/") => format!("/{name}"),
        Some(parent) => format!("{parent}/{name}"),
    }
}

/// true if `candidate` is `ancestor` itself or lives somewhere beneath it.
///
/// `/ab` is not beneath `/a`, so the prefix has to end on a separator
pub fn is_within(ancestor: &str, candidate: &str) -> bool {
    candidate == ancestor
        || candidate
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// recomputes the path of every folder beneath `folder_id`, given that the folder's own path is now `folder_path`.
///
/// `folders` only needs to hold the subtree (anything else is ignored). Traversal is iterative, so deep trees don't
/// grow the stack, and a folder is never visited twice even if the parent links are corrupt.
/// Returns `(id, new path)` for every descendant, parents before children
pub fn descendant_paths(folder_id: u32, folder_path: &str, folders: &[Folder]) -> Vec<(u32, String)> {
    let mut children: HashMap<u32, Vec<&Folder>> = HashMap::new();
    for folder in folders {
        if let Some(parent_id) = folder.parent_id {
            children.entry(parent_id).or_default().push(folder);
        }
    }
    let mut visited = HashSet::from([folder_id]);
    let mut updated = Vec::new();
    let mut stack = vec![(folder_id, folder_path.to_string())];
    while let Some((id, path)) = stack.pop() {
        let Some(kids) = children.get(&id) else {
            continue;
        };
        for kid in kids {
            if !visited.insert(kid.id) {
                log::warn!("Folder {} was reached twice while recomputing paths, skipping", kid.id);
                continue;
            }
            let kid_path = compute_path(Some(&path), &kid.name);
            updated.push((kid.id, kid_path.clone()));
            stack.push((kid.id, kid_path));
        }
    }
    updated
}
