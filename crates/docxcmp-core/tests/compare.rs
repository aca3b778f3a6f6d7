//! Comparison tests
//!
//! Whole-package comparisons over DOCX fixtures built in memory.

mod common;

use common::{docx, para, styled_para, table, write_docx};
use docxcmp_core::{
    compare, extract_content, CompareError, DocumentSource, DIFFERENCES_FOUND, NO_DIFFERENCES,
};

fn compare_bytes(left: Vec<u8>, right: Vec<u8>) -> docxcmp_core::Comparison {
    compare(
        DocumentSource::bytes("left.docx", left),
        DocumentSource::bytes("right.docx", right),
    )
    .unwrap()
}

#[test]
fn test_document_is_identical_to_itself() {
    let bytes = docx(&format!(
        "{}{}{}",
        para("Hello"),
        table(&[&para("a"), &para("b")]),
        styled_para(r#"<w:b/><w:color w:val="FF0000"/>"#, "World")
    ));

    let result = compare_bytes(bytes.clone(), bytes);
    assert!(result.identical);
    assert_eq!(result.message, NO_DIFFERENCES);
}

#[test]
fn test_identical_paths() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = docx(&para("Same text"));
    let a = write_docx(dir.path(), "a.docx", &bytes);
    let b = write_docx(dir.path(), "b.docx", &bytes);

    let result = compare(&a, &b).unwrap();
    assert!(result.identical);

    // a path and an in-memory copy of the same package
    let result = compare(a.as_path(), DocumentSource::bytes("upload", bytes)).unwrap();
    assert!(result.identical);
}

#[test]
fn test_paragraph_order_matters() {
    let ab = docx(&format!("{}{}", para("A"), para("B")));
    let ba = docx(&format!("{}{}", para("B"), para("A")));

    let result = compare_bytes(ab, ba);
    assert!(!result.identical);
    assert_eq!(result.message, DIFFERENCES_FOUND);
}

#[test]
fn test_extra_paragraph_in_table_cell() {
    let one = docx(&table(&[&para("cell")]));
    let two = docx(&table(&[&format!("{}{}", para("cell"), para("more"))]));

    assert!(!compare_bytes(one, two).identical);
}

#[test]
fn test_color_difference_with_same_text() {
    let red = docx(&styled_para(r#"<w:color w:val="FF0000"/>"#, "Warning"));
    let blue = docx(&styled_para(r#"<w:color w:val="0000FF"/>"#, "Warning"));

    assert!(!compare_bytes(red, blue).identical);
}

#[test]
fn test_absent_and_auto_colors_are_equal() {
    let plain = docx(&para("text"));
    let auto = docx(&styled_para(r#"<w:color w:val="auto"/>"#, "text"));
    let theme_only = docx(&styled_para(r#"<w:color w:themeColor="accent1"/>"#, "text"));

    assert!(compare_bytes(plain.clone(), plain.clone()).identical);
    assert!(compare_bytes(plain.clone(), auto).identical);
    assert!(compare_bytes(plain, theme_only).identical);
}

#[test]
fn test_resplit_runs_are_identical() {
    let whole = docx(r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Hello</w:t></w:r></w:p>"#);
    let split = docx(
        r#"<w:p>
            <w:r><w:rPr><w:b/></w:rPr><w:t>He</w:t></w:r>
            <w:proofErr w:type="spellStart"/>
            <w:r><w:rPr><w:b/></w:rPr><w:t>llo</w:t></w:r>
            <w:r><w:rPr><w:i/></w:rPr><w:t></w:t></w:r>
        </w:p>"#,
    );

    assert!(compare_bytes(whole, split).identical);
}

#[test]
fn test_stray_empty_run_between_equal_runs() {
    let whole = docx(r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>AB</w:t></w:r></w:p>"#);
    let split = docx(
        r#"<w:p>
            <w:r><w:rPr><w:b/></w:rPr><w:t>A</w:t></w:r>
            <w:r><w:t></w:t></w:r>
            <w:r><w:rPr><w:b/></w:rPr><w:t>B</w:t></w:r>
        </w:p>"#,
    );

    assert!(compare_bytes(whole, split).identical);
}

#[test]
fn test_line_break_differs_from_page_break() {
    let line = docx(r#"<w:p><w:r><w:t>A</w:t><w:br/><w:t>B</w:t></w:r></w:p>"#);
    let page = docx(r#"<w:p><w:r><w:t>A</w:t><w:br w:type="page"/><w:t>B</w:t></w:r></w:p>"#);

    assert!(!compare_bytes(line, page).identical);
}

#[test]
fn test_bare_underline_matches_unset() {
    let bare = docx(&styled_para("<w:u/>", "text"));
    let single = docx(&styled_para(r#"<w:u w:val="single"/>"#, "text"));

    assert!(compare_bytes(docx(&para("text")), bare).identical);
    assert!(!compare_bytes(docx(&para("text")), single).identical);
}

#[test]
fn test_explicit_off_differs_from_unset() {
    let unset = docx(&para("text"));
    let off = docx(&styled_para(r#"<w:b w:val="0"/>"#, "text"));

    assert!(!compare_bytes(unset, off).identical);
}

#[test]
fn test_style_and_alignment_differences() {
    let normal = docx(&para("Heading"));
    let heading = docx(r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Heading</w:t></w:r></w:p>"#);
    assert!(!compare_bytes(normal, heading).identical);

    let left = docx(r#"<w:p><w:pPr><w:jc w:val="left"/></w:pPr><w:r><w:t>x</w:t></w:r></w:p>"#);
    let center = docx(r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>x</w:t></w:r></w:p>"#);
    assert!(!compare_bytes(left, center).identical);
}

#[test]
fn test_explicit_default_style_matches_implicit() {
    let implicit = docx(&para("body"));
    let explicit = docx(r#"<w:p><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:t>body</w:t></w:r></w:p>"#);

    assert!(compare_bytes(implicit, explicit).identical);
}

#[test]
fn test_empty_documents_are_identical() {
    assert!(compare_bytes(docx(""), docx("")).identical);
}

#[test]
fn test_table_position_matters() {
    let before = docx(&format!("{}{}", table(&[&para("t")]), para("p")));
    let after = docx(&format!("{}{}", para("p"), table(&[&para("t")])));

    assert!(!compare_bytes(before, after).identical);
}

#[test]
fn test_non_docx_input_is_a_parse_error() {
    let err = compare(
        DocumentSource::bytes("good.docx", docx(&para("x"))),
        DocumentSource::bytes("notes.txt", b"just some text".to_vec()),
    )
    .unwrap_err();

    assert!(matches!(err, CompareError::DocumentParse { .. }));
    assert_eq!(err.source_id(), "notes.txt");
}

#[test]
fn test_zip_without_document_part_is_a_parse_error() {
    let bytes = common::package(&[("word/styles.xml", common::STYLES_XML)]);
    let err = compare(
        DocumentSource::bytes("a", bytes.clone()),
        DocumentSource::bytes("b", bytes),
    )
    .unwrap_err();

    assert!(matches!(err, CompareError::DocumentParse { ref source_id, .. } if source_id == "a"));
}

#[test]
fn test_missing_path_is_reported_before_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.docx");

    // The first input is not even a DOCX; the missing second input still wins
    let err = compare(
        DocumentSource::bytes("garbage", b"garbage".to_vec()),
        &missing,
    )
    .unwrap_err();

    assert!(matches!(err, CompareError::InputMissing { .. }));
    assert_eq!(err.source_id(), missing.display().to_string());
}

#[test]
fn test_extract_content_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(
        dir.path(),
        "doc.docx",
        &docx(&format!("{}{}", para("one"), table(&[&para("two")]))),
    );

    let repr = extract_content(&DocumentSource::from(&path)).unwrap();
    assert_eq!(repr.len(), 2);
    assert_eq!(repr.paragraph_count(), 1);
    assert_eq!(repr.table_count(), 1);
}

#[test]
fn test_concurrent_comparisons() {
    let a = docx(&para("shared"));
    let b = docx(&styled_para("<w:i/>", "shared"));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let (a, b) = (a.clone(), b.clone());
                scope.spawn(move || {
                    let other = if i % 2 == 0 { a.clone() } else { b };
                    compare(
                        DocumentSource::bytes(format!("a{}", i), a),
                        DocumentSource::bytes(format!("b{}", i), other),
                    )
                    .unwrap()
                    .identical
                })
            })
            .collect();

        let verdicts: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(verdicts, [true, false, true, false]);
    });
}
