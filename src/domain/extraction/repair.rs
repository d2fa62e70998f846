//! Best-effort balancing of truncated JSON candidates.

/// Appends the closers a truncated candidate is missing, in fixed order:
/// one `"` when the double-quote count is odd, then one `}` per unmatched
/// `{`.
///
/// Known limitation, kept on purpose: the heuristic cannot tell a dangling
/// string from an intentionally unescaped quote, and blind `}` appension
/// can produce a syntactically valid object that differs structurally from
/// what the model meant. "Parses at all" is the acceptance bar; field
/// validation after the parse is the only safety net.
pub(crate) fn balance_candidate(candidate: &str) -> String {
    let mut repaired = candidate.to_string();

    if candidate.matches('"').count() % 2 == 1 {
        repaired.push('"');
    }

    let open = candidate.matches('{').count();
    let close = candidate.matches('}').count();
    for _ in close..open {
        repaired.push('}');
    }

    repaired
}
