use duplex_api::EditOperation;

/// Coalesce adjacent operations of the same kind and drop empty ones.
///
/// The result replays to the same pair of documents as the input.
#[must_use]
pub fn normalize_operations(operations: Vec<EditOperation>) -> Vec<EditOperation> {
    let mut normalized: Vec<EditOperation> = Vec::with_capacity(operations.len());
    for op in operations {
        if op.text.is_empty() {
            continue;
        }
        match normalized.last_mut() {
            Some(last) if last.kind == op.kind => last.text.push_str(&op.text),
            _ => normalized.push(op),
        }
    }
    normalized
}
