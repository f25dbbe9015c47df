//! The component tree.
//!
//! A [`Node`] is one configured component: a [`Kind`] tag naming its
//! structural role, an optional author id, an [`Attributes`] store and an
//! ordered list of children. Insertion order is significant; it is both the
//! rendering order and the order used to number same-kind siblings.

use crate::attr::{names, Attributes, Fallbacks, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Discriminated tag identifying a node's structural role.
///
/// Parents classify their children by this tag instead of inspecting
/// concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Carousel,
    Item,
    Caption,
    Control,
    Indicator,
    Checkbox,
    /// Literal text content.
    Text,
    /// An application-defined kind.
    Custom(&'static str),
}

impl Kind {
    /// The built-in kinds, in declaration order.
    pub const BUILTIN: [Kind; 7] = [
        Kind::Carousel,
        Kind::Item,
        Kind::Caption,
        Kind::Control,
        Kind::Indicator,
        Kind::Checkbox,
        Kind::Text,
    ];

    /// The tag name used in declarative descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Carousel => "carousel",
            Kind::Item => "carouselItem",
            Kind::Caption => "carouselCaption",
            Kind::Control => "carouselControl",
            Kind::Indicator => "carouselIndicator",
            Kind::Checkbox => "selectBooleanCheckbox",
            Kind::Text => "text",
            Kind::Custom(name) => *name,
        }
    }

    /// Look up a built-in kind by its tag name.
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::BUILTIN.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured component and its children.
#[derive(Debug, Clone)]
pub struct Node {
    kind: Kind,
    id: Option<String>,
    attrs: Attributes,
    children: Vec<Node>,
    active: bool,
    slot: Option<usize>,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            id: None,
            attrs: Attributes::default(),
            children: Vec::new(),
            active: false,
            slot: None,
        }
    }

    /// Create a [`Kind::Text`] node carrying `text` as its value.
    pub fn text(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::new(Kind::Text).with_attr(names::VALUE, text)
    }

    /// Set the author id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Declare an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Install the fallback table used for unset attributes.
    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.attrs.set_fallbacks(fallbacks);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    /// Whether this node takes part in rendering at all.
    pub fn is_rendered(&self) -> bool {
        self.attrs.flag(names::RENDERED)
    }

    pub fn is_disabled(&self) -> bool {
        self.attrs.flag(names::DISABLED)
    }

    /// The active flag a parent computes just before emission.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Position among same-kind siblings, as last computed by the parent.
    /// Reassigned on every pass; never read back from attributes.
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn set_slot(&mut self, slot: Option<usize>) {
        self.slot = slot;
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Append a child.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Remove and return the child at `position`.
    pub fn remove(&mut self, position: usize) -> Option<Node> {
        (position < self.children.len()).then(|| self.children.remove(position))
    }

    /// Children of one kind. Each call starts a fresh scan.
    pub fn children_of_kind(&self, kind: Kind) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Mutable variant of [`children_of_kind`](Node::children_of_kind).
    pub fn children_of_kind_mut(&mut self, kind: Kind) -> impl Iterator<Item = &mut Node> + '_ {
        self.children.iter_mut().filter(move |c| c.kind == kind)
    }

    /// Whether any child has the given kind.
    pub fn has_child_of_kind(&self, kind: Kind) -> bool {
        self.children.iter().any(|c| c.kind == kind)
    }

    /// Zero-based index of the child at `position` among its same-kind
    /// siblings. Siblings of other kinds are not counted.
    pub fn index_within_kind(&self, position: usize) -> Option<usize> {
        let kind = self.children.get(position)?.kind;
        Some(
            self.children[..position]
                .iter()
                .filter(|c| c.kind == kind)
                .count(),
        )
    }

    /// Partition the children by kind.
    pub fn classify(&self) -> Classification {
        Classification::of(self)
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Children of a node bucketed by kind, as child positions.
///
/// This is a snapshot: it is recomputed on each call to
/// [`Node::classify`] and does not follow later edits to the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: BTreeMap<Kind, Vec<usize>>,
}

impl Classification {
    pub fn of(node: &Node) -> Self {
        let mut buckets: BTreeMap<Kind, Vec<usize>> = BTreeMap::new();
        for (pos, child) in node.children.iter().enumerate() {
            buckets.entry(child.kind).or_default().push(pos);
        }
        Self { buckets }
    }

    /// Positions of children of `kind`, in order. Empty when none match.
    pub fn positions(&self, kind: Kind) -> &[usize] {
        self.buckets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.positions(kind).len()
    }

    /// The kinds present, in [`Kind`] order.
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.buckets.keys().copied()
    }
}
