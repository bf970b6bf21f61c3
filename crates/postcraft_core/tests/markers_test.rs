//! Tests for image suggestion location.

use postcraft_core::markers::locate_image_suggestion;

#[test]
fn test_accepts_all_label_phrasings() {
    for label in ["配图建议", "图片建议", "建议配图"] {
        let text = format!("正文\n{}: 一杯拿铁", label);
        let found = locate_image_suggestion(&text).unwrap();
        assert_eq!(found.text, "一杯拿铁", "label {}", label);
    }
}

#[test]
fn test_stops_at_blank_line() {
    let text = "配图建议：窗边的书桌\n阳光洒落\n\n下一段";
    let found = locate_image_suggestion(text).unwrap();
    assert_eq!(found.text, "窗边的书桌\n阳光洒落");
    assert_eq!(&text[found.span.end..], "\n\n下一段");
}

#[test]
fn test_requires_separator_after_label() {
    assert!(locate_image_suggestion("配图建议很重要").is_none());
}

#[test]
fn test_skips_unseparated_occurrence() {
    let text = "配图建议很重要\n\n图片建议：夜景";
    let found = locate_image_suggestion(text).unwrap();
    assert_eq!(found.text, "夜景");
}

#[test]
fn test_empty_suggestion_is_none() {
    assert!(locate_image_suggestion("正文\n配图建议：   ").is_none());
    assert!(locate_image_suggestion("没有标签").is_none());
}
