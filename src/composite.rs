//! Composite tree of leaves and containers.
//!
//! Children are held as [`ComponentRef`] (`Rc<dyn Component>`) so `remove`
//! can match by identity. The same handle may be added under several
//! parents; it is then visited once per reference. Nothing checks for
//! cycles.

use std::fmt;
use std::rc::Rc;

use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

pub trait Component {
    fn operation(&self) -> String;
}

pub type ComponentRef = Rc<dyn Component>;

// =============================================================================
// Leaf
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    name: String,
}

impl Leaf {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Component for Leaf {
    fn operation(&self) -> String {
        self.name.clone()
    }
}

// =============================================================================
// Container
// =============================================================================

/// What `remove` does when the child is not present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovePolicy {
    /// Leave the children untouched.
    #[default]
    Ignore,
    /// Drop the last child instead, the way a `splice(indexOf(x), 1)` does
    /// when `indexOf` returns -1.
    DropLast,
}

#[derive(Default)]
pub struct Container {
    children: Vec<ComponentRef>,
    policy: RemovePolicy,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RemovePolicy) -> Self {
        Self {
            children: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> RemovePolicy {
        self.policy
    }

    /// Appends `child`. Duplicates are allowed.
    pub fn add(&mut self, child: ComponentRef) {
        self.children.push(child);
    }

    /// Removes the first child that is the same handle as `child`.
    ///
    /// Returns the removed handle. On a miss the outcome depends on the
    /// container's [`RemovePolicy`].
    pub fn remove(&mut self, child: &ComponentRef) -> Option<ComponentRef> {
        match self.children.iter().position(|c| Rc::ptr_eq(c, child)) {
            Some(index) => Some(self.children.remove(index)),
            None => match self.policy {
                RemovePolicy::Ignore => None,
                RemovePolicy::DropLast => {
                    let dropped = self.children.pop();
                    if dropped.is_some() {
                        warn!("remove: child not found, dropped last child instead");
                    }
                    dropped
                }
            },
        }
    }

    pub fn children(&self) -> &[ComponentRef] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Container {
    fn operation(&self) -> String {
        self.children.iter().map(|child| child.operation()).join(",")
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("children", &self.operation())
            .field("policy", &self.policy)
            .finish()
    }
}
