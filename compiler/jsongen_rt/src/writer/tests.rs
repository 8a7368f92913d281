#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

fn written(f: impl FnOnce(&mut Writer)) -> String {
    let mut w = Writer::new();
    f(&mut w);
    String::from_utf8(w.build_bytes().unwrap()).unwrap()
}

#[test]
fn plain_string() {
    assert_eq!(written(|w| w.string("hello")), r#""hello""#);
}

#[test]
fn empty_string() {
    assert_eq!(written(|w| w.string("")), r#""""#);
}

#[test]
fn string_escapes() {
    assert_eq!(
        written(|w| w.string("a\"b\\c\nd\te\r\u{8}\u{c}")),
        r#""a\"b\\c\nd\te\r\b\f""#
    );
}

#[test]
fn control_characters_use_unicode_escapes() {
    assert_eq!(written(|w| w.string("\u{1}\u{1f}")), r#""\u0001\u001f""#);
}

#[test]
fn non_ascii_passes_through() {
    assert_eq!(written(|w| w.string("héllo ✓")), "\"héllo ✓\"");
}

#[test]
fn integers_keep_their_width() {
    let out = written(|w| {
        w.int8(i8::MIN);
        w.raw_byte(b' ');
        w.uint8(u8::MAX);
        w.raw_byte(b' ');
        w.int64(i64::MIN);
        w.raw_byte(b' ');
        w.uint64(u64::MAX);
        w.raw_byte(b' ');
        w.int(-3);
        w.raw_byte(b' ');
        w.uint(7);
    });
    assert_eq!(
        out,
        "-128 255 -9223372036854775808 18446744073709551615 -3 7"
    );
}

#[test]
fn floats() {
    assert_eq!(written(|w| w.float64(1.5)), "1.5");
    assert_eq!(written(|w| w.float32(0.25)), "0.25");
    assert_eq!(written(|w| w.float64(-0.0)), "-0.0");
}

#[test]
fn non_finite_float_is_an_error() {
    let mut w = Writer::new();
    w.float32(f32::INFINITY);
    assert!(matches!(w.error(), Some(Error::NonFiniteFloat(f)) if f.is_infinite()));
    assert!(w.build_bytes().is_err());
}

#[test]
fn booleans() {
    assert_eq!(written(|w| w.bool(true)), "true");
    assert_eq!(written(|w| w.bool(false)), "false");
}

#[test]
fn raw_bytes_are_verbatim() {
    assert_eq!(written(|w| w.raw(Ok(b"{not json".to_vec()))), "{not json");
}

#[test]
fn raw_empty_is_null() {
    assert_eq!(written(|w| w.raw(Ok(Vec::new()))), "null");
}

#[test]
fn first_error_wins() {
    let mut w = Writer::new();
    w.raw(Err(Error::custom("first")));
    w.raw(Err(Error::custom("second")));
    w.raw_string("still written");
    assert_eq!(w.error().unwrap().to_string(), "first");
    assert_eq!(w.as_bytes(), b"still written");
    assert_eq!(w.build_bytes().unwrap_err().to_string(), "first");
}

#[test]
fn reset_clears_everything() {
    let mut w = Writer::with_capacity(16);
    w.raw_string("abc");
    w.raw(Err(Error::custom("boom")));
    assert_eq!(w.len(), 3);
    w.reset();
    assert!(w.is_empty());
    assert!(w.error().is_none());
}
