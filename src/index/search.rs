use alloc::string::String;
use core::{cmp::Ordering, ops::Range};

/// Finds the contiguous run of `names` that start with `prefix`.
///
/// `names` must be sorted in ascending ordinal order. The run is located by binary searching
/// for any matching entry (the anchor) and then widening out to both ends of the run.
/// An empty prefix matches everything.
pub(crate) fn prefix_range(names: &[String], prefix: &str) -> Range<usize> {
    // skip comparisons if we have a unit prefix
    if prefix.is_empty() {
        return 0..names.len();
    }

    let matches = |s: &String| s.starts_with(prefix);

    // Entries that do not start with the prefix compare by their full ordinal order, so an
    // entry shorter than the prefix only sorts below it when it is a proper prefix of it.
    // Anything greater than the prefix that does not start with it differs at a position
    // inside the prefix, which places it above every matching entry.
    let found = names.binary_search_by(|s| {
        if matches(s) {
            Ordering::Equal
        } else {
            s.as_str().cmp(prefix)
        }
    });

    // any Err is a miss, whatever insertion point it carries
    let Ok(anchor) = found else {
        return 0..0;
    };

    let left_open = anchor > 0 && matches(&names[anchor - 1]);
    let right_open = names.get(anchor + 1).is_some_and(matches);

    if !left_open && !right_open {
        return anchor..anchor + 1;
    }

    // names[..anchor] is a run of non-matches followed by a run of matches, names[anchor..]
    // is the reverse, so both boundaries are partition points
    let min = if left_open {
        names[..anchor].partition_point(|s| !matches(s))
    } else {
        anchor
    };

    let max = if right_open {
        names[anchor..].partition_point(matches) + anchor
    } else {
        anchor + 1
    };

    min..max
}
