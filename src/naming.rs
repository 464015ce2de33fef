//! Node naming
//!
//! Turns tree nodes into the names the simulator gives its per-node directories. Names
//! are built from the leaf identifier (optionally suffixed with the branch length) or,
//! for unlabeled internal nodes, from the canonical rendering of the whole subtree, and
//! are always passed through [`sanitize`].

use crate::tree::render::render_with_root_distance;
use crate::tree::TreeNode;
use tracing::warn;

/// Make a tree label safe for use as a file or directory name.
///
/// The replacements are applied in a fixed order; later steps see the output of
/// earlier ones.
pub fn sanitize(name: &str) -> String {
    let name = name
        .replace(' ', "")
        .replace(',', "")
        .replace(':', "-")
        .replace('.', "_")
        .replace(';', "")
        .replace('\'', "")
        .replace('"', "")
        .replace('(', "_L_")
        .replace(')', "_R_");
    name.trim_end_matches('0')
        .trim_end_matches(|c| matches!(c, '-' | '0' | '_'))
        .to_string()
}

/// Canonical name of `node`.
///
/// Nodes with an identifier are named by it, suffixed with the branch length when
/// `include_distance` is set and the length is non-zero. Unlabeled internal nodes are
/// named by their subtree rendering; `include_distance` only controls whether the
/// node's own branch length appears in it.
pub fn name_of(node: &TreeNode, include_distance: bool) -> String {
    let base = match node.identifier() {
        Some(id) => {
            let distance = node.distance();
            if !include_distance || distance == 0.0 {
                id.to_string()
            } else {
                format!("{}{}", id, format_distance(distance))
            }
        }
        None => {
            let own = if include_distance {
                node.distance()
            } else {
                0.0
            };
            render_with_root_distance(node, own)
        }
    };
    sanitize(&base)
}

/// [`name_of`] for a possibly absent node. An absent node names to the empty string.
pub fn name_of_optional(node: Option<&TreeNode>, include_distance: bool) -> String {
    match node {
        Some(node) => name_of(node, include_distance),
        None => {
            warn!("Requested name of an absent tree node");
            String::new()
        }
    }
}

/// Decimal form of a branch length: 12 significant digits in `%g` style, with `.0`
/// appended when the result would otherwise read as an integer (`0.5`, `1.0`,
/// `1e-05`, `1e+12`). `0.1 + 0.2` prints as `0.3`.
pub fn format_distance(value: f64) -> String {
    const PRECISION: i32 = 12;

    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    // Round to the target precision first; the exponent after rounding picks the form.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..PRECISION).contains(&exponent) {
        let decimals = (PRECISION - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        let trimmed = trim_fraction(&fixed);
        if trimmed.contains('.') {
            trimmed.to_string()
        } else {
            format!("{}.0", trimmed)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
