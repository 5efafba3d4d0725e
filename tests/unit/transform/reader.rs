use super::*;
use crate::host::snapshot::{Snapshot, SnapshotHost, SnapshotNode};

fn host_with(node: SnapshotNode) -> SnapshotHost {
    SnapshotHost::new(Snapshot {
        legacy_ordering: false,
        roots: vec![node],
    })
    .unwrap()
}

#[test]
fn none_reads_as_identity() {
    let host = host_with(SnapshotNode::new("n").style("transform", "none"));
    let n = host.node("n").unwrap();
    let m = TransformReader::default().read_transform(&host, n).unwrap();
    assert_eq!(m.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn padded_none_reads_as_identity() {
    let host = host_with(SnapshotNode::new("n").style("-webkit-transform", "  none \n"));
    let n = host.node("n").unwrap();
    let m = TransformReader::default().read_transform(&host, n).unwrap();
    assert_eq!(m, Affine::IDENTITY);
}

#[test]
fn matrix_value_reads_exactly() {
    let host = host_with(SnapshotNode::new("n").style("transform", "matrix(2, 0, 0, 2, 10, 20)"));
    let n = host.node("n").unwrap();
    let m = TransformReader::default().read_transform(&host, n).unwrap();
    assert_eq!(m.as_coeffs(), [2.0, 0.0, 0.0, 2.0, 10.0, 20.0]);
}

#[test]
fn prefixed_value_wins_over_unprefixed() {
    let host = host_with(
        SnapshotNode::new("n")
            .style("transform", "matrix(1, 0, 0, 1, 0, 0)")
            .style("-webkit-transform", "matrix(3, 0, 0, 3, 0, 0)")
            .style("-moz-transform", "matrix(4, 0, 0, 4, 0, 0)"),
    );
    let n = host.node("n").unwrap();
    let m = TransformReader::default().read_transform(&host, n).unwrap();
    assert_eq!(m.as_coeffs()[0], 3.0);
}

#[test]
fn empty_candidates_are_skipped() {
    let host = host_with(
        SnapshotNode::new("n")
            .style("-webkit-transform", "")
            .style("-ms-transform", "  ")
            .style("-o-transform", "matrix(1, 0, 0, 1, 7, 8)"),
    );
    let n = host.node("n").unwrap();
    let reader = TransformReader::default();
    assert_eq!(
        reader.resolved_value(&host, n).as_deref(),
        Some("matrix(1, 0, 0, 1, 7, 8)")
    );
    assert_eq!(
        reader.read_transform(&host, n).unwrap().translation(),
        crate::foundation::core::Vec2::new(7.0, 8.0)
    );
}

#[test]
fn no_candidate_value_is_missing_transform() {
    let host = host_with(SnapshotNode::new("n").style("opacity", "1"));
    let n = host.node("n").unwrap();
    assert!(matches!(
        TransformReader::default().read_transform(&host, n),
        Err(GeomError::MissingTransform)
    ));
}

#[test]
fn malformed_value_surfaces_as_error() {
    let host = host_with(SnapshotNode::new("n").style("transform", "matrix(1, 2, 3)"));
    let n = host.node("n").unwrap();
    let err = TransformReader::default()
        .read_transform(&host, n)
        .unwrap_err();
    assert!(matches!(err, GeomError::MalformedTransform { .. }));
}

#[test]
fn synthetic_prefix_table_is_honoured() {
    let host = host_with(
        SnapshotNode::new("n")
            .style("-webkit-transform", "matrix(9, 0, 0, 9, 0, 0)")
            .style("transform", "matrix(2, 0, 0, 2, 0, 0)"),
    );
    let n = host.node("n").unwrap();
    let reader = TransformReader::new(
        VendorPrefixes::default().with_transform_candidates(["transform"]),
    );
    assert_eq!(reader.read_transform(&host, n).unwrap().as_coeffs()[0], 2.0);
    assert_eq!(reader.prefixes().transform_candidates(), ["transform"]);
}

#[test]
fn reading_does_not_mutate_the_host() {
    let host = host_with(SnapshotNode::new("n").style("transform", "matrix(2, 0, 0, 2, 1, 1)"));
    let n = host.node("n").unwrap();
    let reader = TransformReader::default();
    let first = reader.read_transform(&host, n).unwrap();
    let second = reader.read_transform(&host, n).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        host.computed_style(n, "transform").as_deref(),
        Some("matrix(2, 0, 0, 2, 1, 1)")
    );
}
