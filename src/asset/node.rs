// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Metadata attached to an asset node.
///
/// Attributes are the part of the payload visitors branch on (declared inputs,
/// filter names, flags), so they take part in structural comparison.
pub type Attributes = BTreeMap<String, Value>;

/// Logical identity of an asset, typically its logical path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for AssetKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A node in an asset dependency tree.
///
/// Each node exclusively owns its children. The key is fixed at construction;
/// content, attributes and children can change, either on the node itself or
/// by a visitor substituting a new node.
///
/// # Example
/// ```
/// use asset_pipeline::asset::AssetNode;
///
/// let bundle = AssetNode::new("js/app.js")
///     .with_attribute("filters", serde_json::json!(["trim"]))
///     .with_child(AssetNode::new("js/lib.js").with_content("var lib = 1;"));
///
/// assert_eq!(bundle.children().len(), 1);
/// assert!(bundle.has_child("js/lib.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetNode {
    key: AssetKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<AssetNode>,
}

impl AssetNode {
    pub fn new(key: impl Into<AssetKey>) -> Self {
        Self {
            key: key.into(),
            content: None,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_child(mut self, child: AssetNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = AssetNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn key(&self) -> &AssetKey {
        &self.key
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Read a string-array attribute, ignoring non-string entries.
    pub fn string_list(&self, name: &str) -> Vec<&str> {
        match self.attributes.get(name) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(single)) => vec![single.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.insert(name.into(), value);
    }

    pub fn children(&self) -> &[AssetNode] {
        &self.children
    }

    pub fn push_child(&mut self, child: AssetNode) {
        self.children.push(child);
    }

    pub fn has_child(&self, key: &str) -> bool {
        self.children.iter().any(|c| c.key.as_str() == key)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AssetNode::node_count).sum::<usize>()
    }

    /// Structural snapshot: keys, attributes and child order, without content.
    pub fn signature(&self) -> NodeSignature {
        NodeSignature {
            key: self.key.clone(),
            attributes: self.attributes.clone(),
            children: self.children.iter().map(AssetNode::signature).collect(),
        }
    }

    pub(crate) fn take_children(&mut self) -> Vec<AssetNode> {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn set_children(&mut self, children: Vec<AssetNode>) {
        self.children = children;
    }
}

/// Content-free structural view of an asset subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSignature {
    pub key: AssetKey,
    pub attributes: Attributes,
    pub children: Vec<NodeSignature>,
}
