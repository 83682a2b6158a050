use super::*;

#[test]
fn single_line() {
    let source = "hello world";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(10), 1);
    assert_eq!(table.offset_to_line_col(source, 6), (1, 7));
    assert_eq!(table.line_count(), 1);
}

#[test]
fn multiple_lines() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 3), (1, 4)); // the '\n'
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
    assert_eq!(table.line_count(), 3);
}

#[test]
fn empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
}

#[test]
fn columns_count_chars() {
    let source = "αβγ\nδε";
    let table = LineOffsetTable::build(source);
    // 'γ' starts at byte 4, third char
    assert_eq!(table.offset_to_line_col(source, 4), (1, 3));
    // 'ε' starts at byte 9
    assert_eq!(table.offset_to_line_col(source, 9), (2, 2));
}

#[test]
fn span_start_uses_start_offset() {
    let source = "(put 1)\n(error)";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.span_start(source, Span::new(8, 15)), (2, 1));
}

#[test]
fn offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 99), (1, 3));
}
