//! Pairs that are not both the same ordinary variant.

use std::mem::discriminant;

use tracing::warn;

use crate::content::{Content, Mismatch};
use crate::taxonomy::ErrorKind;

/// Resolves a pair that no per-variant algorithm handles.
///
/// A wildcard on either side absorbs the other node as a warning. Different
/// variants are a type mismatch. A same-variant pair reaching this point has
/// no handler; it is logged and reported as an unknown error.
pub(crate) fn resolve(left: &Content, right: &Content) -> Content {
    let kind = match (left, right) {
        (Content::Wildcard(_), _) | (_, Content::Wildcard(_)) => ErrorKind::WildcardMatched,
        _ if discriminant(left) != discriminant(right) => ErrorKind::TypeMismatch,
        _ => {
            warn!(
                variant = left.kind_name(),
                "no alignment handler registered for same-variant pair"
            );
            ErrorKind::Unknown
        }
    };
    Mismatch::both(left.clone(), right.clone(), kind).into()
}
