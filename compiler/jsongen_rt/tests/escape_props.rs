//! Property tests for the runtime writer.
//!
//! Whatever a generated encoder writes through `Writer::string` must parse
//! back, through an independent JSON parser, to the original text.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use jsongen_rt::Writer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn strings_round_trip_through_serde(s in any::<String>()) {
        let mut w = Writer::new();
        w.string(&s);
        let bytes = w.build_bytes().unwrap();
        let parsed: String = serde_json::from_slice(&bytes).unwrap();
        prop_assert_eq!(parsed, s);
    }

    #[test]
    fn integers_match_display(n in any::<i64>(), u in any::<u32>()) {
        let mut w = Writer::new();
        w.int64(n);
        w.raw_byte(b',');
        w.uint32(u);
        let text = String::from_utf8(w.build_bytes().unwrap()).unwrap();
        prop_assert_eq!(text, format!("{n},{u}"));
    }

    #[test]
    fn finite_floats_parse_back(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let mut w = Writer::new();
        w.float64(f);
        let text = String::from_utf8(w.build_bytes().unwrap()).unwrap();
        prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
        prop_assert_eq!(text.parse::<f64>().unwrap(), f);
    }
}
