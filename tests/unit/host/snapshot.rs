use super::*;

fn stage() -> SnapshotHost {
    SnapshotHost::new(Snapshot {
        legacy_ordering: false,
        roots: vec![
            SnapshotNode::new("stage")
                .child(
                    SnapshotNode::new("frame-a")
                        .offset(10.0, 10.0)
                        .child(SnapshotNode::new("a1"))
                        .child(SnapshotNode::new("a2")),
                )
                .child(SnapshotNode::new("frame-b").child(SnapshotNode::new("b1"))),
            SnapshotNode::new("detached"),
        ],
    })
    .unwrap()
}

#[test]
fn ids_map_to_preorder_handles() {
    let host = stage();
    assert_eq!(host.len(), 7);
    assert_eq!(host.node("stage").unwrap(), NodeId(0));
    assert_eq!(host.node("a2").unwrap(), NodeId(3));
    assert_eq!(host.node("b1").unwrap(), NodeId(5));
    assert_eq!(host.id_of(NodeId(4)), "frame-b");
    assert_eq!(host.parent(NodeId(3)), Some(NodeId(1)));
    assert_eq!(host.parent(NodeId(0)), None);
}

#[test]
fn unknown_id_is_reported() {
    let host = stage();
    assert!(matches!(host.node("nope"), Err(GeomError::UnknownNode(id)) if id == "nope"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = SnapshotHost::new(Snapshot {
        legacy_ordering: false,
        roots: vec![SnapshotNode::new("x").child(SnapshotNode::new("x"))],
    })
    .unwrap_err();
    assert!(matches!(err, GeomError::Validation(_)));
}

#[test]
fn document_position_bits_follow_dom() {
    let host = stage();
    let stage_id = host.node("stage").unwrap();
    let a1 = host.node("a1").unwrap();
    let b1 = host.node("b1").unwrap();
    let detached = host.node("detached").unwrap();

    assert_eq!(
        host.compare_document_position(a1, a1),
        Some(DocumentPosition::empty())
    );
    let p = host.compare_document_position(a1, stage_id).unwrap();
    assert!(p.has(DocumentPosition::CONTAINS));
    assert!(p.has(DocumentPosition::PRECEDING));
    let p = host.compare_document_position(stage_id, a1).unwrap();
    assert!(p.has(DocumentPosition::CONTAINED_BY));
    assert!(p.has(DocumentPosition::FOLLOWING));
    assert_eq!(
        host.compare_document_position(a1, b1),
        Some(DocumentPosition::FOLLOWING)
    );
    assert_eq!(
        host.compare_document_position(b1, a1),
        Some(DocumentPosition::PRECEDING)
    );
    assert_eq!(
        host.compare_document_position(a1, detached),
        Some(DocumentPosition::DISCONNECTED)
    );
}

#[test]
fn legacy_ordering_hides_native_query() {
    let mut snapshot = Snapshot {
        legacy_ordering: true,
        roots: vec![SnapshotNode::new("r").child(SnapshotNode::new("c"))],
    };
    let host = SnapshotHost::new(snapshot.clone()).unwrap();
    assert_eq!(host.compare_document_position(NodeId(0), NodeId(1)), None);
    assert_eq!(host.source_index(NodeId(1)), 1);

    snapshot.legacy_ordering = false;
    let host = SnapshotHost::new(snapshot).unwrap();
    assert!(host.compare_document_position(NodeId(0), NodeId(1)).is_some());
}

#[test]
fn json_fields_default_when_absent() {
    let host = SnapshotHost::from_json_str(
        r#"{
            "roots": [
                {
                    "id": "root",
                    "children": [
                        { "id": "child", "offset": [5, 7], "style": { "transform": "none" } }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();
    let child = host.node("child").unwrap();
    assert_eq!(host.layout_offset(child), Vec2::new(5.0, 7.0));
    assert_eq!(
        host.computed_style(child, "transform").as_deref(),
        Some("none")
    );
    assert_eq!(host.computed_style(child, "-webkit-transform"), None);
    assert_eq!(host.layout_offset(host.node("root").unwrap()), Vec2::ZERO);
}

#[test]
fn bad_json_maps_to_serde_error() {
    let err = SnapshotHost::from_json_str("{ \"roots\": 3 }").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn mutation_is_visible_to_later_reads() {
    let mut host = stage();
    let a1 = host.node("a1").unwrap();
    host.set_style(a1, "transform", "matrix(1, 0, 0, 1, 3, 4)");
    host.set_offset(a1, Vec2::new(1.0, 2.0));
    assert_eq!(
        host.computed_style(a1, "transform").as_deref(),
        Some("matrix(1, 0, 0, 1, 3, 4)")
    );
    assert_eq!(host.layout_offset(a1), Vec2::new(1.0, 2.0));
}
