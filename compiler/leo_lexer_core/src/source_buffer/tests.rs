use super::*;

#[test]
fn empty_source_has_sentinel() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_bytes(), b"");
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn content_is_copied() {
    let buf = SourceBuffer::new("let x = 1");
    assert_eq!(buf.as_bytes(), b"let x = 1");
    assert_eq!(buf.len(), 9);
}

#[test]
fn padding_is_cache_line_aligned_and_zeroed() {
    for len in [0usize, 1, 60, 61, 62, 63, 64, 200] {
        let source = vec![b'a'; len];
        let buf = SourceBuffer::new(&source);
        let full = buf.as_sentinel_bytes();
        assert_eq!(full.len() % CACHE_LINE, 0, "len {len}");
        assert!(full.len() >= len + LOOKAHEAD_PADDING, "len {len}");
        assert!(full[len..].iter().all(|&b| b == 0), "len {len}");
    }
}

#[test]
fn arbitrary_bytes_accepted() {
    let bytes: &[u8] = &[0xFF, 0x00, b'a', 0xC3];
    let buf = SourceBuffer::from(bytes);
    assert_eq!(buf.as_bytes(), bytes);
}

#[test]
fn slice_clamps_to_content() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.slice(1, 3), b"bc");
    assert_eq!(buf.slice(1, 99), b"bc");
    assert_eq!(buf.slice(5, 9), b"");
}
