//! Retained vector scene.
//!
//! A tree of class-tagged nodes. Renderers update it through keyed joins
//! ([`Scene::join`]) so repeated renders rewrite nodes in place instead of
//! stacking duplicates, and serialise it with [`Scene::to_svg`].

use crate::svg;
use dialkit_core::{Path, Point, Rect, Shadow, ShapeStyle, Size, StrokeStyle, TextStyle, Transform2D};
use serde::{Deserialize, Serialize};

/// Handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One step of a node transform, SVG order (first op is outermost).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    /// Translate by (x, y)
    Translate(f64, f64),
    /// Rotate by degrees, clockwise on screen
    Rotate(f64),
}

impl TransformOp {
    /// Affine form of this step.
    #[must_use]
    pub fn to_transform(self) -> Transform2D {
        match self {
            Self::Translate(x, y) => Transform2D::translate(x, y),
            Self::Rotate(degrees) => Transform2D::rotate_degrees(degrees),
        }
    }
}

/// Compose an SVG-ordered transform list into one affine transform.
#[must_use]
pub fn compose(ops: &[TransformOp]) -> Transform2D {
    ops.iter()
        .rev()
        .fold(Transform2D::identity(), |acc, op| acc.then(&op.to_transform()))
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// Container for child nodes
    Group,
    /// Filled and/or stroked path
    Path {
        /// Geometry
        path: Path,
        /// Style
        style: ShapeStyle,
    },
    /// Straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke
        stroke: StrokeStyle,
    },
    /// Circle
    Circle {
        /// Center
        center: Point,
        /// Radius
        radius: f64,
        /// Style
        style: ShapeStyle,
    },
    /// Rectangle
    Rect {
        /// Bounds
        bounds: Rect,
        /// Style
        style: ShapeStyle,
    },
    /// Text run
    Text {
        /// Content
        content: String,
        /// Anchor position
        position: Point,
        /// Style
        style: TextStyle,
    },
    /// Image
    Image {
        /// Image URI
        href: String,
        /// Placement
        bounds: Rect,
    },
}

impl Element {
    /// SVG tag name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Group => "g",
            Self::Path { .. } => "path",
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Rect { .. } => "rect",
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
        }
    }
}

/// A scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Class used to select the node
    pub class: String,
    /// Drawn element
    pub element: Element,
    /// Local transform
    pub transform: Vec<TransformOp>,
    /// Drop shadow filter
    pub shadow: Option<Shadow>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(class: &str, element: Element, parent: Option<NodeId>) -> Self {
        Self {
            class: class.to_string(),
            element,
            transform: Vec::new(),
            shadow: None,
            parent,
            children: Vec::new(),
        }
    }

    /// Child handles in draw order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent handle (`None` for the root).
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Text content, if this is a text node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.element {
            Element::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// Retained tree of nodes under a root sized to the drawing surface.
#[derive(Debug, Clone)]
pub struct Scene {
    size: Size,
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
}

impl Scene {
    /// Empty scene of the given surface size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            nodes: vec![Some(Node::new("dialkit", Element::Group, None))],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    /// Surface size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Resize the surface.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Root node handle.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Mutable node by handle.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Number of live nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether the root has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node(self.root).map_or(true, |root| root.children.is_empty())
    }

    /// Append a node as the last child of `parent`.
    ///
    /// A stale `parent` handle attaches the node to the root.
    pub fn append(&mut self, parent: NodeId, class: &str, element: Element) -> NodeId {
        let parent = if self.node(parent).is_some() {
            parent
        } else {
            self.root
        };
        let node = Node::new(class, element, Some(parent));
        let id = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    /// Direct children of `parent` with `class`, in order.
    #[must_use]
    pub fn select(&self, parent: NodeId, class: &str) -> Vec<NodeId> {
        self.node(parent).map_or_else(Vec::new, |p| {
            p.children
                .iter()
                .copied()
                .filter(|&id| self.node(id).is_some_and(|n| n.class == class))
                .collect()
        })
    }

    /// Every node with `class`, depth-first in draw order.
    #[must_use]
    pub fn select_all(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(self.root, &mut |id, node| {
            if node.class == class {
                found.push(id);
            }
        });
        found
    }

    /// First node with `class`, depth-first.
    #[must_use]
    pub fn find(&self, class: &str) -> Option<NodeId> {
        self.select_all(class).into_iter().next()
    }

    fn walk(&self, id: NodeId, visit: &mut impl FnMut(NodeId, &Node)) {
        if let Some(node) = self.node(id) {
            visit(id, node);
            for &child in &node.children {
                self.walk(child, visit);
            }
        }
    }

    /// Keyed join of `elements` onto the `class` children of `parent`.
    ///
    /// Existing nodes are updated in place (keeping their transform and
    /// shadow), missing ones appended and extra ones removed. Returns the
    /// handles in element order.
    pub fn join(&mut self, parent: NodeId, class: &str, elements: Vec<Element>) -> Vec<NodeId> {
        let existing = self.select(parent, class);
        let mut ids = Vec::with_capacity(elements.len());
        for (i, element) in elements.into_iter().enumerate() {
            match existing.get(i).copied() {
                Some(id) => {
                    if let Some(node) = self.node_mut(id) {
                        node.element = element;
                    }
                    ids.push(id);
                }
                None => ids.push(self.append(parent, class, element)),
            }
        }
        for &extra in existing.iter().skip(ids.len()) {
            self.remove(extra);
        }
        ids
    }

    /// Remove a node and its subtree. Removing the root clears it instead.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root {
            self.clear();
            return;
        }
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        self.free.push(id.0);
        if let Some(parent) = node.parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|&c| c != id);
        }
        for child in node.children {
            self.remove(child);
        }
    }

    /// Remove every node with `class`. Returns how many were removed.
    pub fn remove_all(&mut self, class: &str) -> usize {
        let ids = self.select_all(class);
        let count = ids.len();
        for id in ids {
            self.remove(id);
        }
        count
    }

    /// Remove `class` children of `parent` only.
    pub fn remove_children(&mut self, parent: NodeId, class: &str) -> usize {
        let ids = self.select(parent, class);
        let count = ids.len();
        for id in ids {
            self.remove(id);
        }
        count
    }

    /// Remove everything under the root.
    pub fn clear(&mut self) {
        let children = self
            .node(self.root)
            .map(|root| root.children.clone())
            .unwrap_or_default();
        for child in children {
            self.remove(child);
        }
    }

    /// Replace a node's transform.
    pub fn set_transform(&mut self, id: NodeId, transform: Vec<TransformOp>) {
        if let Some(node) = self.node_mut(id) {
            node.transform = transform;
        }
    }

    /// Replace a node's drop shadow.
    pub fn set_shadow(&mut self, id: NodeId, shadow: Option<Shadow>) {
        if let Some(node) = self.node_mut(id) {
            node.shadow = shadow;
        }
    }

    /// Transform from a node's local frame to surface pixels.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Transform2D {
        let mut transform = Transform2D::identity();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|c| self.node(c)) {
            transform = transform.then(&compose(&node.transform));
            current = node.parent;
        }
        transform
    }

    /// Standalone SVG document for the scene.
    #[must_use]
    pub fn to_svg(&self) -> String {
        svg::write_document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_core::Color;

    fn text(content: &str) -> Element {
        Element::Text {
            content: content.to_string(),
            position: Point::ORIGIN,
            style: TextStyle::default(),
        }
    }

    fn texts(scene: &Scene, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| scene.node(id).and_then(Node::text).map(str::to_string))
            .collect()
    }

    // =========================================================================
    // Tree Tests
    // =========================================================================

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new(Size::new(400.0, 300.0));
        assert!(scene.is_empty());
        assert_eq!(scene.node_count(), 1);
    }

    #[test]
    fn test_append_and_select() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let group = scene.append(scene.root(), "group", Element::Group);
        scene.append(group, "a", text("1"));
        scene.append(group, "b", text("2"));
        scene.append(group, "a", text("3"));
        let selected = scene.select(group, "a");
        assert_eq!(texts(&scene, &selected), vec!["1", "3"]);
        assert_eq!(scene.select_all("b").len(), 1);
    }

    #[test]
    fn test_remove_subtree_frees_slots() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let group = scene.append(scene.root(), "group", Element::Group);
        scene.append(group, "a", text("1"));
        scene.append(group, "a", text("2"));
        assert_eq!(scene.node_count(), 4);
        scene.remove(group);
        assert_eq!(scene.node_count(), 1);
        assert!(scene.is_empty());

        // freed slots are reused
        scene.append(scene.root(), "x", Element::Group);
        assert!(scene.nodes.len() <= 4);
    }

    #[test]
    fn test_remove_all_by_class() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let g1 = scene.append(scene.root(), "g", Element::Group);
        let g2 = scene.append(scene.root(), "g", Element::Group);
        scene.append(g1, "label", text("x"));
        scene.append(g2, "label", text("y"));
        assert_eq!(scene.remove_all("label"), 2);
        assert!(scene.select_all("label").is_empty());
        assert_eq!(scene.select_all("g").len(), 2);
    }

    #[test]
    fn test_stale_parent_attaches_to_root() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let group = scene.append(scene.root(), "g", Element::Group);
        scene.remove(group);
        let orphan = scene.append(group, "x", Element::Group);
        assert_eq!(scene.node(orphan).and_then(Node::parent), Some(scene.root()));
    }

    // =========================================================================
    // Join Tests
    // =========================================================================

    #[test]
    fn test_join_appends_updates_and_removes() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let root = scene.root();
        let first = scene.join(root, "t", vec![text("a"), text("b"), text("c")]);
        assert_eq!(first.len(), 3);

        let second = scene.join(root, "t", vec![text("x"), text("y")]);
        assert_eq!(second, first[..2].to_vec());
        assert_eq!(texts(&scene, &scene.select(root, "t")), vec!["x", "y"]);
        assert!(scene.node(first[2]).is_none());
    }

    #[test]
    fn test_join_keeps_transform() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let root = scene.root();
        let ids = scene.join(root, "t", vec![text("a")]);
        scene.set_transform(ids[0], vec![TransformOp::Rotate(45.0)]);
        let again = scene.join(root, "t", vec![text("b")]);
        let node = scene.node(again[0]).unwrap();
        assert_eq!(node.transform, vec![TransformOp::Rotate(45.0)]);
        assert_eq!(node.text(), Some("b"));
    }

    #[test]
    fn test_join_empty_removes_all() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let root = scene.root();
        scene.join(root, "t", vec![text("a"), text("b")]);
        assert!(scene.join(root, "t", Vec::new()).is_empty());
        assert!(scene.is_empty());
    }

    // =========================================================================
    // Transform Tests
    // =========================================================================

    #[test]
    fn test_compose_translate_then_rotate() {
        let transform = compose(&[TransformOp::Translate(100.0, 50.0), TransformOp::Rotate(-90.0)]);
        let p = transform.apply(Point::new(10.0, 0.0));
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_world_transform_nests() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        let group = scene.append(scene.root(), "g", Element::Group);
        scene.set_transform(group, vec![TransformOp::Translate(5.0, 5.0)]);
        let child = scene.append(
            group,
            "c",
            Element::Circle {
                center: Point::ORIGIN,
                radius: 1.0,
                style: ShapeStyle::fill(Color::RED),
            },
        );
        scene.set_transform(child, vec![TransformOp::Translate(1.0, 2.0)]);
        let p = scene.world_transform(child).apply(Point::ORIGIN);
        assert!((p.x - 6.0).abs() < 1e-9);
        assert!((p.y - 7.0).abs() < 1e-9);
    }
}
