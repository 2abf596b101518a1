//! Comprehensive tests for hilite-dom
//!
//! Tree building, mutation, boundary point ordering and traversal on
//! hand-built documents.

use std::cmp::Ordering;

use hilite_dom::{
    compare_boundary_points, BoundaryPoint, Document, DomTree, NodeId, PositionComparison, Range,
    RangeCompare, Selection, TreeWalker, WhatToShow,
};

/// body > [p#0 > "Hello ", em > "big", " world"], [p#1 > "Second"]
struct Fixture {
    doc: Document,
    p0: NodeId,
    hello: NodeId,
    em: NodeId,
    big: NodeId,
    world: NodeId,
    p1: NodeId,
    second: NodeId,
}

fn fixture() -> Fixture {
    let mut doc = Document::default();
    let body = doc.body().unwrap();
    let tree = doc.tree_mut();

    let p0 = tree.create_element("p");
    let hello = tree.create_text("Hello ");
    let em = tree.create_element("em");
    let big = tree.create_text("big");
    let world = tree.create_text(" world");
    let p1 = tree.create_element("p");
    let second = tree.create_text("Second");

    tree.append_child(body, p0).unwrap();
    tree.append_child(p0, hello).unwrap();
    tree.append_child(p0, em).unwrap();
    tree.append_child(em, big).unwrap();
    tree.append_child(p0, world).unwrap();
    tree.append_child(body, p1).unwrap();
    tree.append_child(p1, second).unwrap();

    Fixture {
        doc,
        p0,
        hello,
        em,
        big,
        world,
        p1,
        second,
    }
}

// ============================================================================
// TREE STRUCTURE
// ============================================================================

#[test]
fn test_dom_tree_creation() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    let span = tree.create_element("span");
    let text = tree.create_text("Hello, World!");

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, span).unwrap();
    tree.append_child(span, text).unwrap();

    assert_eq!(tree.len(), 4);
    let div_node = tree.get(div).unwrap();
    assert_eq!(div_node.parent, tree.root());
    assert_eq!(div_node.first_child, span);
    assert_eq!(tree.get(span).unwrap().first_child, text);
    assert_eq!(tree.text_content(div), "Hello, World!");
}

#[test]
fn test_document_skeleton() {
    let doc = Document::new("https://example.com/");
    let html = doc.document_element().unwrap();
    let body = doc.body().unwrap();

    assert_eq!(doc.url(), "https://example.com/");
    assert_eq!(doc.tree().tag_name(html), Some("html"));
    assert_eq!(doc.tree().parent(body), Some(html));
    assert_eq!(doc.tree().child_count(html), 2);
}

#[test]
fn test_text_content_and_ancestors() {
    let f = fixture();
    let tree = f.doc.tree();

    assert_eq!(tree.text_content(f.p0), "Hello big world");
    let ancestors: Vec<_> = tree.ancestors(f.big).collect();
    assert_eq!(ancestors[0], f.em);
    assert_eq!(ancestors[1], f.p0);
    assert_eq!(ancestors.last(), Some(&NodeId::ROOT));
    assert_eq!(tree.common_ancestor(f.big, f.world), Some(f.p0));
    assert_eq!(tree.common_ancestor(f.big, f.second), f.doc.body());
}

#[test]
fn test_children_and_indexes() {
    let f = fixture();
    let tree = f.doc.tree();

    let kids: Vec<_> = tree.children(f.p0).map(|(id, _)| id).collect();
    assert_eq!(kids, vec![f.hello, f.em, f.world]);
    assert_eq!(tree.child_index(f.world), 2);
    assert_eq!(tree.node_length(f.p0), 3);
    assert_eq!(tree.node_length(f.world), 6);
}

// ============================================================================
// MUTATION
// ============================================================================

#[test]
fn test_insert_before_moves_attached_node() {
    let mut f = fixture();
    let tree = f.doc.tree_mut();

    // Move " world" in front of "Hello "
    tree.insert_before(f.p0, f.world, Some(f.hello)).unwrap();
    let kids: Vec<_> = tree.children(f.p0).map(|(id, _)| id).collect();
    assert_eq!(kids, vec![f.world, f.hello, f.em]);

    // Move "Second" into the first paragraph
    tree.append_child(f.p0, f.second).unwrap();
    assert_eq!(tree.child_count(f.p1), 0);
    assert_eq!(tree.parent(f.second), Some(f.p0));
    assert_eq!(tree.text_content(f.p0), " worldHello bigSecond");
}

#[test]
fn test_wrap_and_unwrap_round_trip() {
    let mut f = fixture();
    let tree = f.doc.tree_mut();
    let before = tree.text_content(f.p0);

    let span = tree.create_element("span");
    tree.insert_before(f.p0, span, Some(f.em)).unwrap();
    tree.append_child(span, f.em).unwrap();
    assert_eq!(tree.parent(f.em), Some(span));
    assert_eq!(tree.text_content(f.p0), before);

    tree.insert_before(f.p0, f.em, Some(span)).unwrap();
    tree.remove_child(f.p0, span).unwrap();
    let kids: Vec<_> = tree.children(f.p0).map(|(id, _)| id).collect();
    assert_eq!(kids, vec![f.hello, f.em, f.world]);
    assert!(tree.parent(span).is_none());
}

#[test]
fn test_normalize_after_split() {
    let mut f = fixture();
    let tree = f.doc.tree_mut();

    let part = tree.create_text("Sec");
    tree.set_text(f.second, "ond").unwrap();
    tree.insert_before(f.p1, part, Some(f.second)).unwrap();
    let empty = tree.create_text("");
    tree.append_child(f.p1, empty).unwrap();
    assert_eq!(tree.child_count(f.p1), 3);

    tree.normalize(f.p1).unwrap();
    assert_eq!(tree.child_count(f.p1), 1);
    assert_eq!(tree.text(part), Some("Second"));
}

// ============================================================================
// BOUNDARY POINTS AND RANGES
// ============================================================================

#[test]
fn test_boundary_point_ordering() {
    let f = fixture();
    let tree = f.doc.tree();
    let bp = BoundaryPoint::new;

    assert_eq!(compare_boundary_points(tree, bp(f.hello, 2), bp(f.hello, 4)), Ordering::Less);
    assert_eq!(compare_boundary_points(tree, bp(f.hello, 6), bp(f.big, 0)), Ordering::Less);
    assert_eq!(compare_boundary_points(tree, bp(f.second, 0), bp(f.world, 6)), Ordering::Greater);
    // (p0, 1) sits between "Hello " and <em>
    assert_eq!(compare_boundary_points(tree, bp(f.p0, 1), bp(f.hello, 6)), Ordering::Greater);
    assert_eq!(compare_boundary_points(tree, bp(f.p0, 1), bp(f.big, 0)), Ordering::Less);
    assert_eq!(compare_boundary_points(tree, bp(f.p0, 3), bp(f.world, 6)), Ordering::Greater);
}

#[test]
fn test_range_to_string_across_nodes() {
    let f = fixture();
    let tree = f.doc.tree();

    let range = Range::between(f.hello, 3, f.second, 3);
    assert!(range.validate(tree).is_ok());
    assert_eq!(range.to_string(tree), "lo big worldSec");
    assert_eq!(range.common_ancestor_container(tree), f.doc.body());

    let inside = Range::between(f.p0, 1, f.p0, 2);
    assert_eq!(inside.to_string(tree), "big");
}

#[test]
fn test_compare_point_and_intersection() {
    let f = fixture();
    let tree = f.doc.tree();
    let range = Range::between(f.big, 1, f.world, 3);

    assert_eq!(range.compare_point(tree, f.hello, 0), PositionComparison::Before);
    assert_eq!(range.compare_point(tree, f.big, 1), PositionComparison::Inside);
    assert_eq!(range.compare_point(tree, f.world, 3), PositionComparison::Inside);
    assert_eq!(range.compare_point(tree, f.second, 0), PositionComparison::After);

    assert!(range.intersects_node_contents(tree, f.big));
    assert!(range.intersects_node_contents(tree, f.world));
    assert!(!range.intersects_node_contents(tree, f.hello));
    assert!(!range.intersects_node_contents(tree, f.second));
}

#[test]
fn test_compare_ranges() {
    let f = fixture();
    let tree = f.doc.tree();
    let first = Range::between(f.hello, 0, f.big, 2);
    let second = Range::between(f.big, 2, f.second, 6);

    assert_eq!(first.compare_boundary_points(RangeCompare::StartToStart, &second, tree), Ordering::Less);
    // first.end against second.start: they touch
    assert_eq!(first.compare_boundary_points(RangeCompare::StartToEnd, &second, tree), Ordering::Equal);
    assert_eq!(first.compare_boundary_points(RangeCompare::EndToEnd, &second, tree), Ordering::Less);
    assert_eq!(second.compare_boundary_points(RangeCompare::EndToStart, &first, tree), Ordering::Equal);
}

#[test]
fn test_selection_text() {
    let f = fixture();
    let tree = f.doc.tree();
    let mut selection = Selection::new();
    assert_eq!(selection.to_string(tree), "");

    selection.add_range(Range::between(f.em, 0, f.second, 2));
    assert_eq!(selection.to_string(tree), "big worldSe");
    selection.remove_all_ranges();
    assert!(selection.is_collapsed());
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn test_text_walker_order() {
    let f = fixture();
    let tree = f.doc.tree();
    let texts: Vec<_> = TreeWalker::texts(NodeId::ROOT).iter(tree).collect();
    assert_eq!(texts, vec![f.hello, f.big, f.world, f.second]);

    // Confined to the subtree
    let texts: Vec<_> = TreeWalker::texts(f.p0).iter(tree).collect();
    assert_eq!(texts, vec![f.hello, f.big, f.world]);
}

#[test]
fn test_element_walker_and_class_lookup() {
    let mut f = fixture();
    let body = f.doc.body().unwrap();
    f.doc
        .tree_mut()
        .get_mut(f.em)
        .and_then(|n| n.as_element_mut())
        .unwrap()
        .add_class("mark");

    let tree = f.doc.tree();
    let elements: Vec<_> = TreeWalker::new(body, WhatToShow::ELEMENT).iter(tree).collect();
    assert_eq!(elements, vec![f.p0, f.em, f.p1]);

    assert_eq!(tree.elements_with_class(NodeId::ROOT, "mark"), vec![f.em]);
    assert_eq!(tree.closest_with_class(f.big, "mark"), Some(f.em));
    assert_eq!(tree.closest_with_class(f.world, "mark"), None);
}
