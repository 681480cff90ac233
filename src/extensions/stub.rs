// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Small visitors for exercising the traversal engine.

use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::asset::AssetNode;
use crate::errors::VisitorError;
use crate::traits::{Hook, Visit, Visitor};

const BEFORE: &[Hook] = &[Hook::Before];
const AFTER: &[Hook] = &[Hook::After];
const BOTH: &[Hook] = &[Hook::Before, Hook::After];

fn hooks_for(hook: Hook) -> &'static [Hook] {
    match hook {
        Hook::Before => BEFORE,
        Hook::After => AFTER,
    }
}

/// Shared, ordered record of hook invocations.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.0.lock() {
            entries.push(entry);
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.0.lock() {
            entries.clear();
        }
    }
}

/// Records `name:hook:key` for every call and never changes the tree.
pub struct RecordingVisitor {
    name: String,
    hooks: &'static [Hook],
    priority: i32,
    log: CallLog,
}

impl RecordingVisitor {
    pub fn before(name: &str, log: CallLog) -> Self {
        Self::with_hooks(name, BEFORE, log)
    }

    pub fn after(name: &str, log: CallLog) -> Self {
        Self::with_hooks(name, AFTER, log)
    }

    pub fn both(name: &str, log: CallLog) -> Self {
        Self::with_hooks(name, BOTH, log)
    }

    fn with_hooks(name: &str, hooks: &'static [Hook], log: CallLog) -> Self {
        Self {
            name: name.to_string(),
            hooks,
            priority: 0,
            log,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Visitor for RecordingVisitor {
    fn name(&self) -> &str {
        &self.name
    }

    fn hooks(&self) -> &'static [Hook] {
        self.hooks
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn visit(&self, hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        self.log.push(format!("{}:{}:{}", self.name, hook, node.key()));
        Ok(Visit::Unchanged)
    }
}

/// Fails when it reaches the node with the target key.
pub struct FailingVisitor {
    target: String,
    message: String,
    hook: Hook,
}

impl FailingVisitor {
    pub fn on(target: &str, message: &str) -> Self {
        Self {
            target: target.to_string(),
            message: message.to_string(),
            hook: Hook::Before,
        }
    }

    pub fn after_on(target: &str, message: &str) -> Self {
        Self {
            hook: Hook::After,
            ..Self::on(target, message)
        }
    }
}

impl Visitor for FailingVisitor {
    fn name(&self) -> &str {
        "failing"
    }

    fn hooks(&self) -> &'static [Hook] {
        hooks_for(self.hook)
    }

    fn visit(&self, _hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        if node.key().as_str() == self.target {
            Err(VisitorError::new(self.message.clone()))
        } else {
            Ok(Visit::Unchanged)
        }
    }
}

/// Substitutes a fixed node for the node with the target key.
pub struct SubstitutingVisitor {
    target: String,
    replacement: AssetNode,
    hook: Hook,
}

impl SubstitutingVisitor {
    pub fn before(target: &str, replacement: AssetNode) -> Self {
        Self {
            target: target.to_string(),
            replacement,
            hook: Hook::Before,
        }
    }

    pub fn after(target: &str, replacement: AssetNode) -> Self {
        Self {
            target: target.to_string(),
            replacement,
            hook: Hook::After,
        }
    }
}

impl Visitor for SubstitutingVisitor {
    fn name(&self) -> &str {
        "substitute"
    }

    fn hooks(&self) -> &'static [Hook] {
        hooks_for(self.hook)
    }

    fn visit(&self, _hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        if node.key().as_str() == self.target {
            Ok(Visit::Replace(self.replacement.clone()))
        } else {
            Ok(Visit::Unchanged)
        }
    }
}

/// After hook that gives the parent a child once.
pub struct AppendChildVisitor {
    parent: String,
    child: String,
}

impl AppendChildVisitor {
    pub fn new(parent: &str, child: &str) -> Self {
        Self {
            parent: parent.to_string(),
            child: child.to_string(),
        }
    }
}

impl Visitor for AppendChildVisitor {
    fn name(&self) -> &str {
        "append_child"
    }

    fn hooks(&self) -> &'static [Hook] {
        AFTER
    }

    fn visit(&self, _hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        if node.key().as_str() == self.parent && !node.has_child(&self.child) {
            Ok(Visit::Replace(
                node.clone().with_child(AssetNode::new(self.child.as_str())),
            ))
        } else {
            Ok(Visit::Unchanged)
        }
    }
}

/// What a [`ChurningVisitor`] rewrites on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Churn {
    /// Bump a `revision` attribute, a structural change.
    Attribute,
    /// Rewrite content only.
    Content,
}

/// Changes the root on every pass, so the tree never settles.
pub struct ChurningVisitor {
    churn: Churn,
    calls: AtomicUsize,
}

impl ChurningVisitor {
    pub fn new(churn: Churn) -> Self {
        Self {
            churn,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Visitor for ChurningVisitor {
    fn name(&self) -> &str {
        "churning"
    }

    fn hooks(&self) -> &'static [Hook] {
        AFTER
    }

    fn visit(&self, _hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let next = match self.churn {
            Churn::Attribute => node.clone().with_attribute("revision", json!(call)),
            Churn::Content => node.clone().with_content(format!("revision {call}")),
        };
        Ok(Visit::Replace(next))
    }
}
