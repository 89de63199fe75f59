mod common;

use common::{Order, binary_ply, header, write_file};
use plyconform::{ConvertError, decode_vertex_table, parse_header, read_vertex_table};
use tempfile::TempDir;

#[test]
fn reads_mixed_scalar_types_little_endian() {
    let dir = TempDir::new().expect("temp dir");
    let props = [
        ("float", "x"),
        ("uchar", "red"),
        ("short", "label"),
        ("double", "t"),
    ];
    let rows = vec![vec![1.5, 255.0, -3.0, 0.25], vec![-2.0, 7.0, 12.0, 1e3]];
    let path = write_file(dir.path(), "mixed.ply", &binary_ply(Order::Little, &props, &rows));

    let header = parse_header(&path).expect("header should parse");
    let table = read_vertex_table(&path, &header).expect("body should decode");

    assert_eq!(table.vertex_count(), 2);
    assert_eq!(table.len(), 4);
    assert_eq!(table.column("x"), Some(&[1.5, -2.0][..]));
    assert_eq!(table.column("red"), Some(&[255.0, 7.0][..]));
    assert_eq!(table.column("label"), Some(&[-3.0, 12.0][..]));
    assert_eq!(table.column("t"), Some(&[0.25, 1000.0][..]));
}

#[test]
fn reads_big_endian_body() {
    let props = [("ushort", "a"), ("int", "b"), ("float", "c")];
    let rows = vec![vec![513.0, -70000.0, 3.5]];
    let bytes = binary_ply(Order::Big, &props, &rows);

    let header = plyconform::core::parse_header_from_reader(&bytes[..]).expect("header");
    let table = decode_vertex_table(&bytes, &header).expect("body should decode");

    assert_eq!(table.column("a"), Some(&[513.0][..]));
    assert_eq!(table.column("b"), Some(&[-70000.0][..]));
    assert_eq!(table.column("c"), Some(&[3.5][..]));
}

#[test]
fn truncated_body_reports_first_short_record() {
    let props = [("float", "x"), ("float", "y")];
    let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
    let mut bytes = binary_ply(Order::Little, &props, &rows);
    // Drop the last 3 bytes: record 2 becomes short.
    bytes.truncate(bytes.len() - 3);

    let header = plyconform::core::parse_header_from_reader(&bytes[..]).expect("header");
    let err = decode_vertex_table(&bytes, &header).expect_err("body is truncated");

    assert!(matches!(
        err,
        ConvertError::UnexpectedEof {
            record: 2,
            vertex_count: 3
        }
    ));
}

#[test]
fn declared_count_larger_than_body_fails_at_first_missing_record() {
    let dir = TempDir::new().expect("temp dir");
    let props = [("float", "x")];
    let mut bytes = header("binary_little_endian", 4, &props).into_bytes();
    bytes.extend_from_slice(&1.0f32.to_le_bytes());
    let path = write_file(dir.path(), "short.ply", &bytes);

    let header = parse_header(&path).expect("header should parse");
    let err = read_vertex_table(&path, &header).expect_err("only one record present");

    assert!(matches!(err, ConvertError::UnexpectedEof { record: 1, .. }));
}

#[test]
fn ascii_body_is_rejected_at_read_time() {
    let dir = TempDir::new().expect("temp dir");
    let mut bytes = header("ascii", 1, &[("float", "x")]).into_bytes();
    bytes.extend_from_slice(b"1.0\n");
    let path = write_file(dir.path(), "ascii.ply", &bytes);

    let header = parse_header(&path).expect("ascii header is introspectable");
    let err = read_vertex_table(&path, &header).expect_err("ascii body");

    assert!(matches!(err, ConvertError::UnsupportedBodyFormat { .. }));
    assert!(err.to_string().contains("ascii"));
}

#[test]
fn data_after_vertex_records_is_ignored() {
    let text = "ply\n\
                format binary_little_endian 1.0\n\
                element vertex 1\n\
                property uchar v\n\
                element face 1\n\
                property list uchar int vertex_indices\n\
                end_header\n";
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(9);
    bytes.extend_from_slice(&[3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    let header = plyconform::core::parse_header_from_reader(&bytes[..]).expect("header");
    let table = decode_vertex_table(&bytes, &header).expect("vertex body is complete");

    assert_eq!(table.column("v"), Some(&[9.0][..]));
}

#[test]
fn zero_vertices_yield_empty_columns() {
    let bytes = binary_ply(Order::Little, &[("float", "x"), ("float", "y")], &[]);
    let header = plyconform::core::parse_header_from_reader(&bytes[..]).expect("header");
    let table = decode_vertex_table(&bytes, &header).expect("empty body");

    assert_eq!(table.vertex_count(), 0);
    assert_eq!(table.column("x"), Some(&[][..]));
    assert_eq!(table.column("y"), Some(&[][..]));
}
