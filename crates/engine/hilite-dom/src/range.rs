//! Range and boundary points
//!
//! A boundary point is a (node, offset) pair. For character data the
//! offset is a byte offset into the text; for every other node it is a
//! child index. Comparison follows the DOM "position of a boundary point"
//! algorithm, so points in different containers compare correctly.

use std::cmp::Ordering;

use crate::{DomError, DomResult, DomTree, NodeId};

/// One end of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryPoint {
    pub node: NodeId,
    /// Byte offset for text, child index for containers
    pub offset: usize,
}

impl BoundaryPoint {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Position of boundary point `a` relative to boundary point `b`.
pub fn compare_boundary_points(tree: &DomTree, a: BoundaryPoint, b: BoundaryPoint) -> Ordering {
    if a.node == b.node {
        return a.offset.cmp(&b.offset);
    }
    if tree.tree_order(a.node, b.node) == Ordering::Greater {
        return position_of_preceding(tree, b, a).reverse();
    }
    position_of_preceding(tree, a, b)
}

// `a.node` precedes `b.node` in tree order. The only way for `a` to come
// after `b` is when `a.node` is an ancestor and its offset points past the
// child holding `b`.
fn position_of_preceding(tree: &DomTree, a: BoundaryPoint, b: BoundaryPoint) -> Ordering {
    if tree.is_ancestor(a.node, b.node) {
        let mut child = b.node;
        while let Some(parent) = tree.parent(child) {
            if parent == a.node {
                break;
            }
            child = parent;
        }
        if tree.child_index(child) < a.offset {
            return Ordering::Greater;
        }
    }
    Ordering::Less
}

/// Where a point lies relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionComparison {
    Before,
    Inside,
    After,
}

/// Range comparison types (the DOM `how` constants)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCompare {
    /// This start against the source start
    StartToStart,
    /// This end against the source start
    StartToEnd,
    /// This end against the source end
    EndToEnd,
    /// This start against the source end
    EndToStart,
}

/// The span between two boundary points, start not after end once
/// validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: BoundaryPoint,
    end: BoundaryPoint,
}

impl Range {
    /// Create a collapsed range at the given position
    pub fn new(container: NodeId, offset: usize) -> Self {
        let point = BoundaryPoint::new(container, offset);
        Self {
            start: point,
            end: point,
        }
    }

    /// Range from (`start_container`, `start_offset`) to (`end_container`, `end_offset`)
    pub fn between(
        start_container: NodeId,
        start_offset: usize,
        end_container: NodeId,
        end_offset: usize,
    ) -> Self {
        Self {
            start: BoundaryPoint::new(start_container, start_offset),
            end: BoundaryPoint::new(end_container, end_offset),
        }
    }

    /// Range covering the whole content of a node
    pub fn node_contents(tree: &DomTree, node: NodeId) -> Self {
        Self::between(node, 0, node, tree.node_length(node))
    }

    pub fn start(&self) -> BoundaryPoint {
        self.start
    }

    pub fn end(&self) -> BoundaryPoint {
        self.end
    }

    pub fn start_container(&self) -> NodeId {
        self.start.node
    }

    pub fn start_offset(&self) -> usize {
        self.start.offset
    }

    pub fn end_container(&self) -> NodeId {
        self.end.node
    }

    pub fn end_offset(&self) -> usize {
        self.end.offset
    }

    /// Start and end are the same point
    pub fn collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn set_start(&mut self, node: NodeId, offset: usize) {
        self.start = BoundaryPoint::new(node, offset);
    }

    pub fn set_end(&mut self, node: NodeId, offset: usize) {
        self.end = BoundaryPoint::new(node, offset);
    }

    /// Move both ends onto the start (`true`) or the end (`false`)
    pub fn collapse(&mut self, to_start: bool) {
        if to_start {
            self.end = self.start;
        } else {
            self.start = self.end;
        }
    }

    /// Check that both points exist, fit their nodes and are ordered
    pub fn validate(&self, tree: &DomTree) -> DomResult<()> {
        for point in [self.start, self.end] {
            if tree.get(point.node).is_none() {
                return Err(DomError::NotFound(point.node));
            }
            let length = tree.node_length(point.node);
            if point.offset > length {
                return Err(DomError::IndexSize {
                    node: point.node,
                    offset: point.offset,
                    length,
                });
            }
        }
        if compare_boundary_points(tree, self.start, self.end) == Ordering::Greater {
            return Err(DomError::InvertedRange);
        }
        Ok(())
    }

    /// Deepest node containing both boundary containers
    pub fn common_ancestor_container(&self, tree: &DomTree) -> Option<NodeId> {
        tree.common_ancestor(self.start.node, self.end.node)
    }

    /// Compare one boundary of this range with one of `source`
    pub fn compare_boundary_points(
        &self,
        how: RangeCompare,
        source: &Range,
        tree: &DomTree,
    ) -> Ordering {
        let (this_point, source_point) = match how {
            RangeCompare::StartToStart => (self.start, source.start),
            RangeCompare::StartToEnd => (self.end, source.start),
            RangeCompare::EndToEnd => (self.end, source.end),
            RangeCompare::EndToStart => (self.start, source.end),
        };
        compare_boundary_points(tree, this_point, source_point)
    }

    /// Locate a point relative to this range
    pub fn compare_point(&self, tree: &DomTree, node: NodeId, offset: usize) -> PositionComparison {
        let point = BoundaryPoint::new(node, offset);
        if compare_boundary_points(tree, point, self.start) == Ordering::Less {
            PositionComparison::Before
        } else if compare_boundary_points(tree, point, self.end) == Ordering::Greater {
            PositionComparison::After
        } else {
            PositionComparison::Inside
        }
    }

    /// Check whether the content of `node` overlaps this range, edges included
    pub fn intersects_node_contents(&self, tree: &DomTree, node: NodeId) -> bool {
        let probe = Range::node_contents(tree, node);
        self.compare_boundary_points(RangeCompare::EndToStart, &probe, tree) != Ordering::Greater
            && self.compare_boundary_points(RangeCompare::StartToEnd, &probe, tree) != Ordering::Less
    }

    /// The text covered by the range (the DOM `Range.toString()`)
    pub fn to_string(&self, tree: &DomTree) -> String {
        if self.start.node == self.end.node {
            if let Some(text) = tree.text(self.start.node) {
                return text
                    .get(self.start.offset..self.end.offset)
                    .unwrap_or_default()
                    .to_string();
            }
        }
        let Some(ancestor) = self.common_ancestor_container(tree) else {
            return String::new();
        };

        let mut out = String::new();
        for id in tree.descendants(ancestor).filter(|&id| tree.is_text(id)) {
            let text = tree.text(id).unwrap_or_default();
            let from = if id == self.start.node {
                self.start.offset
            } else if self.compare_point(tree, id, 0) == PositionComparison::Before {
                continue;
            } else {
                0
            };
            let to = if id == self.end.node {
                self.end.offset
            } else if self.compare_point(tree, id, text.len()) == PositionComparison::After {
                continue;
            } else {
                text.len()
            };
            if from < to {
                out.push_str(text.get(from..to).unwrap_or_default());
            }
        }
        out
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(NodeId::ROOT, 0)
    }
}
