use formdom::text::{char_width, display_width, mask, pad_to_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are typically 2 cells wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("ab", 4), "ab  ");
    assert_eq!(pad_to_width("日", 4), "日  ");
    assert_eq!(pad_to_width("toolong", 3), "toolong");
}

#[test]
fn test_mask_counts_chars() {
    assert_eq!(mask("pässwörd"), "••••••••");
    assert_eq!(mask(""), "");
}
