//! Alias resolution for message and description fields.
//!
//! A node may spell the same field several ways (`message`, `msg`, `m`). When more
//! than one is present, the one declared last in the node wins, regardless of the
//! order of the alias list itself.

use super::tree::ValueNode;

/// Return the string value of the last key in `node` that is one of `aliases`.
///
/// Keys whose value is not a string are skipped as if they were not there.
pub fn resolve<'a>(node: &'a ValueNode, aliases: &[String]) -> Option<&'a str> {
    node.iter()
        .filter(|(key, _)| aliases.iter().any(|alias| alias == *key))
        .filter_map(|(_, value)| value.as_scalar())
        .next_back()
}
