//! UiTreeIndex: scoped access to the foreground app's UI hierarchy.
//!
//! Two tools cover every traversal the strategies need:
//!
//! - [`UiElement`] wraps one acquired handle and releases it when dropped, so
//!   a handle cannot outlive the scope that obtained it and cannot be released
//!   twice.  Early returns, `?`, and panics unwind through `Drop` like any
//!   other exit.
//! - [`TreeSnapshot`] walks the whole tree once and keeps every element in an
//!   indexed arena.  Queries (interactive candidates, first scrollable node)
//!   run over the arena; dropping the snapshot releases every handle in it.
//!
//! # Stale nodes
//!
//! The foreground app keeps running while the engine walks its tree.  When a
//! host call reports [`HostError::StaleNode`] (or any other failure) for a
//! node, the walk skips that node's subtree and carries on.  The stale handle
//! is still released through its guard.

use std::collections::VecDeque;

use kiosk_input_core::{FocusKind, NodeAction, NodeInfo};
use tracing::debug;

use super::host::{AccessibilityHost, HostError, RawNode};

/// One acquired UI element handle.  Released on drop.
pub struct UiElement<'h> {
    host: &'h dyn AccessibilityHost,
    raw: RawNode,
}

impl<'h> UiElement<'h> {
    /// Takes ownership of an acquisition made on `host`.
    pub fn adopt(host: &'h dyn AccessibilityHost, raw: RawNode) -> Self {
        Self { host, raw }
    }

    pub fn raw(&self) -> RawNode {
        self.raw
    }

    /// Reads the element's current attributes.
    pub fn info(&self) -> Result<NodeInfo, HostError> {
        self.host.node_info(self.raw)
    }

    /// Acquires the `index`-th child.
    pub fn child(&self, index: usize) -> Result<Option<UiElement<'h>>, HostError> {
        let host = self.host;
        Ok(host.child(self.raw, index)?.map(|raw| UiElement::adopt(host, raw)))
    }

    /// Acquires the parent.
    pub fn parent(&self) -> Result<Option<UiElement<'h>>, HostError> {
        let host = self.host;
        Ok(host.parent(self.raw)?.map(|raw| UiElement::adopt(host, raw)))
    }

    /// Performs `action` on this element.
    pub fn perform(&self, action: &NodeAction) -> Result<bool, HostError> {
        self.host.perform_node_action(self.raw, action)
    }
}

impl Drop for UiElement<'_> {
    fn drop(&mut self) {
        self.host.release(self.raw);
    }
}

impl std::fmt::Debug for UiElement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiElement").field("raw", &self.raw).finish()
    }
}

/// The active window's tree, rooted at an acquired root element.
pub struct UiTree<'h> {
    host: &'h dyn AccessibilityHost,
    root: UiElement<'h>,
}

impl std::fmt::Debug for UiTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiTree").field("root", &self.root).finish()
    }
}

impl<'h> UiTree<'h> {
    /// Acquires the active window's root.  `Ok(None)` when no window is
    /// active (e.g. during an app transition).
    pub fn active(host: &'h dyn AccessibilityHost) -> Result<Option<Self>, HostError> {
        Ok(host.active_root()?.map(|raw| UiTree {
            host,
            root: UiElement::adopt(host, raw),
        }))
    }

    pub fn root(&self) -> &UiElement<'h> {
        &self.root
    }

    /// Acquires the element holding `kind` focus.
    pub fn find_focus(&self, kind: FocusKind) -> Result<Option<UiElement<'h>>, HostError> {
        let host = self.host;
        Ok(host
            .find_focus(self.root.raw(), kind)?
            .map(|raw| UiElement::adopt(host, raw)))
    }

    /// Resolves the focused element: input focus first, then accessibility
    /// focus.
    pub fn resolve_focus(&self) -> Result<Option<(FocusKind, UiElement<'h>)>, HostError> {
        for kind in [FocusKind::Input, FocusKind::Accessibility] {
            if let Some(element) = self.find_focus(kind)? {
                return Ok(Some((kind, element)));
            }
        }
        Ok(None)
    }

    /// Walks the whole tree into an indexed arena, consuming the root.
    pub fn into_snapshot(self) -> TreeSnapshot<'h> {
        TreeSnapshot::capture(self.root)
    }
}

/// One element of a [`TreeSnapshot`].
#[derive(Debug)]
pub struct IndexedNode<'h> {
    pub element: UiElement<'h>,
    pub info: NodeInfo,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// A one-shot arena of every reachable element, root at index 0.
#[derive(Debug)]
pub struct TreeSnapshot<'h> {
    nodes: Vec<IndexedNode<'h>>,
}

impl<'h> TreeSnapshot<'h> {
    /// Walks the tree below `root`.
    ///
    /// A root whose attributes cannot be read yields an empty snapshot.
    pub fn capture(root: UiElement<'h>) -> Self {
        let mut nodes = Vec::new();
        let Ok(info) = root.info() else {
            debug!("root node unreadable; empty snapshot");
            return Self { nodes };
        };
        nodes.push(IndexedNode {
            element: root,
            info,
            parent: None,
            children: Vec::new(),
        });

        let mut pending = VecDeque::from([0usize]);
        while let Some(index) = pending.pop_front() {
            let child_count = nodes[index].info.child_count;
            for child_index in 0..child_count {
                let child = match nodes[index].element.child(child_index) {
                    Ok(Some(child)) => child,
                    Ok(None) => continue,
                    Err(e) => {
                        // Parent went stale: the rest of its subtree is gone.
                        debug!(error = %e, "skipping remaining children");
                        break;
                    }
                };
                let info = match child.info() {
                    Ok(info) => info,
                    Err(e) => {
                        debug!(error = %e, "skipping unreadable subtree");
                        continue;
                    }
                };
                let new_index = nodes.len();
                nodes.push(IndexedNode {
                    element: child,
                    info,
                    parent: Some(index),
                    children: Vec::new(),
                });
                nodes[index].children.push(new_index);
                pending.push_back(new_index);
            }
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> &IndexedNode<'h> {
        &self.nodes[index]
    }

    /// Indices of every visible element that is focusable or clickable with a
    /// non-empty rectangle, in depth-first tree order.
    ///
    /// Invisible elements hide their whole subtree.
    pub fn interactive_candidates(&self) -> Vec<usize> {
        let mut found = Vec::new();
        if self.nodes.is_empty() {
            return found;
        }
        let mut stack = vec![0usize];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.info.flags.visible() {
                continue;
            }
            if node.info.flags.interactive() && !node.info.bounds.is_empty() {
                found.push(index);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    /// The first visible scrollable element in breadth-first order.
    pub fn first_scrollable(&self) -> Option<usize> {
        // The arena is filled breadth-first, so index order is BFS order.
        self.nodes
            .iter()
            .position(|n| n.info.flags.scrollable() && n.info.flags.visible())
    }
}
