/// Substrings that identify a label printer queue, matched case-insensitively
pub const VENDOR_HINTS: [&str; 2] = ["zebra", "zdesigner"];

/// Pick the queue to print to
///
/// An explicit override wins as-is. Otherwise the first queue whose name
/// contains one of the [`VENDOR_HINTS`] is used.
pub fn resolve_queue(queue_override: Option<&str>, available: &[String]) -> Option<String> {
    if let Some(name) = queue_override.filter(|n| !n.is_empty()) {
        return Some(name.to_string());
    }

    available
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            VENDOR_HINTS.iter().any(|hint| lower.contains(hint))
        })
        .cloned()
}
