//! Display-color resolution for staff entries.
//!
//! A shift that already carries a persisted color keeps it; everything else
//! resolves through a fixed palette keyed by employee id, so the same
//! employee colors the same way on every rebuild.

/// Color used for events that resolve to no staff entry, and for drafts with
/// no explicit color choice.
pub const DEFAULT_COLOR: &str = "#4285f4";

/// Fixed palette for synthesized staff colors.
pub const PALETTE: [&str; 8] = [
    "#4285f4", // blue
    "#ea4335", // red
    "#fbbc05", // yellow
    "#34a853", // green
    "#673ab7", // deep purple
    "#ff5722", // deep orange
    "#795548", // brown
    "#607d8b", // blue grey
];

/// Resolves the palette entry for an employee id.
#[must_use]
pub fn color_for(employee_id: &str) -> &'static str {
    PALETTE[palette_index(employee_id)]
}

// FNV-1a over the id bytes
fn palette_index(employee_id: &str) -> usize {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in employee_id.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    let len = u64::try_from(PALETTE.len()).unwrap_or(1);
    usize::try_from(hash % len).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_stable_per_id() {
        assert_eq!(color_for("E1"), color_for("E1"));
        assert_eq!(color_for("employee-42"), color_for("employee-42"));
    }

    #[test]
    fn test_color_comes_from_palette() {
        for id in ["E1", "E2", "E3", "", "a-very-long-employee-identifier"] {
            assert!(PALETTE.contains(&color_for(id)));
        }
    }

    #[test]
    fn test_ids_spread_over_palette() {
        let distinct: std::collections::HashSet<_> =
            (0..64).map(|n| color_for(&format!("E{n}"))).collect();
        assert!(distinct.len() > 1);
    }
}
