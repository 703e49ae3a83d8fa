// Test code uses unwrap for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used)]

//! The process-wide format cache.
//!
//! Kept to a single test in its own binary: it clears and counts the
//! global cache, which other tests in the same process would disturb.

use stencilc::{FormatFamily, Value};

#[test]
fn clear_and_repopulate_global_cache() {
    stencilc::init_tracing();
    stencilc::clear_format_cache();
    assert!(stencilc::format_cache().is_empty());

    let first = stencilc::compile(r#"{{a|number:".3f"}}"#).unwrap();
    let second = stencilc::compile(r#"total {{b|number:".3f"}}"#).unwrap();
    assert_eq!(stencilc::format_cache().len(), 1);

    stencilc::compile(r#"{{a|time:"%Y"}}"#).unwrap();
    let cache = stencilc::format_cache();
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.index_of(FormatFamily::Time, "%Y"), Some(1));

    stencilc::clear_format_cache();
    assert_eq!(stencilc::format_cache().len(), 0);

    // Compiled templates keep their formatters.
    let context = Value::object([("a", 1), ("b", 2)]);
    assert_eq!(first.evaluate(&context), "1.000");
    assert_eq!(second.evaluate(&context), "total 2.000");

    stencilc::compile(r#"{{a|number:".3f"}}"#).unwrap();
    assert_eq!(stencilc::format_cache().len(), 1);

    let emitted = stencilc::emit_source(r#"{{a|time:"%Y"}}"#, None, None).unwrap();
    assert!(emitted.contains("&__formats[1]"));
    assert_eq!(stencilc::format_cache().len(), 2);
}
