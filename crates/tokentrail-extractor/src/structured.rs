//! Structured (JSON) dependency search
//!
//! The tree is walked depth first with an explicit stack, so arbitrarily
//! deep bodies cannot exhaust the call stack.

use crate::config::NestedMatchPolicy;
use serde_json::Value;

/// Whether a body should be parsed as JSON
pub fn is_likely_json(mime_type: Option<&str>, text: &str) -> bool {
    if mime_type.is_some_and(|m| m.to_ascii_lowercase().contains("json")) {
        return true;
    }
    let trimmed = text.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

enum Children<'a> {
    Object(serde_json::map::Iter<'a>),
    Array(std::slice::Iter<'a, Value>),
}

struct Frame<'a> {
    children: Children<'a>,
    /// Compact JSON of this container, kept when it contains the target
    fallback: Option<String>,
}

impl<'a> Frame<'a> {
    fn open(node: &'a Value, fallback: Option<String>) -> Option<Self> {
        let children = match node {
            Value::Object(map) => Children::Object(map.iter()),
            Value::Array(items) => Children::Array(items.iter()),
            _ => return None,
        };
        Some(Self { children, fallback })
    }

    fn next(&mut self) -> Option<(Option<&'a String>, &'a Value)> {
        match &mut self.children {
            Children::Object(it) => it.next().map(|(k, v)| (Some(k), v)),
            Children::Array(it) => it.next().map(|v| (None, v)),
        }
    }
}

/// Search a parsed body for the origin of `target`.
///
/// Object entries are visited in document order, then array items in order,
/// depth first; the first hit wins.
///
/// - A string under a key that contains `target` yields the key.
/// - A number, bool or null whose text contains `target` yields that text.
/// - A value whose text *equals* `target` is the target's own field and is
///   never a hit.
/// - A nested structure containing `target` yields its compact JSON under
///   [`NestedMatchPolicy::Stringify`]; under [`NestedMatchPolicy::Descend`] it
///   is searched first, string array items containing `target` become hits,
///   and the JSON is only returned when nothing inside qualified.
pub fn find_in_json(root: &Value, target: &str, policy: NestedMatchPolicy) -> Option<String> {
    if target.is_empty() {
        return None;
    }
    let descend = policy == NestedMatchPolicy::Descend;
    let mut stack = vec![Frame::open(root, None)?];

    while let Some(frame) = stack.last_mut() {
        let Some((key, child)) = frame.next() else {
            if let Some(fallback) = stack.pop().and_then(|f| f.fallback) {
                return Some(fallback);
            }
            continue;
        };

        match child {
            Value::Object(_) | Value::Array(_) => {
                let rendered = child.to_string();
                let contains = rendered.contains(target);
                if contains && !descend && key.is_some() {
                    return Some(rendered);
                }
                let fallback = (contains && descend).then_some(rendered);
                stack.extend(Frame::open(child, fallback));
            }
            Value::String(s) => {
                if s == target {
                    clear_fallbacks(&mut stack);
                } else if s.contains(target) {
                    match key {
                        Some(k) => return Some(k.clone()),
                        None if descend => return Some(s.clone()),
                        None => {}
                    }
                }
            }
            scalar => {
                let rendered = scalar.to_string();
                if rendered == target {
                    clear_fallbacks(&mut stack);
                } else if rendered.contains(target) && (key.is_some() || descend) {
                    return Some(rendered);
                }
            }
        }
    }
    None
}

// The enclosing structures contain the target through its own field; their
// JSON is no longer a useful origin.
fn clear_fallbacks(stack: &mut [Frame<'_>]) {
    for frame in stack {
        frame.fallback = None;
    }
}
