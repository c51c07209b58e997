use alloc::vec::Vec;

/// A trait to merge a sorted batch into an already sorted Vec in one pass.
pub(super) trait MergeSorted<T> {
    /// Moves every item of `incoming` into self, keeping self in ascending order.
    ///
    /// The merge is stable: an item already in self stays ahead of an equal incoming item,
    /// and equal incoming items keep their relative order. `incoming` is left empty but
    /// keeps its allocation.
    ///
    /// This is functionally equivalent to:
    /// ```rust
    /// let mut dst: Vec<i32>;
    /// # dst = vec![1, 3];
    /// let mut src: Vec<i32>;
    /// # src = vec![2, 3];
    ///
    /// dst.append(&mut src);
    /// dst.sort();
    /// # assert_eq!(dst, &[1, 2, 3, 3]);
    /// ```
    ///
    /// Both self and `incoming` must already be sorted, this is only checked in debug builds.
    fn merge_sorted(&mut self, incoming: &mut Vec<T>);
}

impl<T: Ord> MergeSorted<T> for Vec<T> {
    fn merge_sorted(&mut self, incoming: &mut Vec<T>) {
        debug_assert!(self.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(incoming.windows(2).all(|w| w[0] <= w[1]));

        let (Some(last), Some(first)) = (self.last(), incoming.first()) else {
            // one side is empty
            self.append(incoming);
            return;
        };

        // everything new sorts after what we have, which is the common bulk-load case
        if last <= first {
            self.append(incoming);
            return;
        }

        let capacity = self.len() + incoming.len();
        let existing = core::mem::replace(self, Vec::with_capacity(capacity));

        let mut old = existing.into_iter().peekable();
        let mut new = incoming.drain(..).peekable();

        loop {
            let take_old = match (old.peek(), new.peek()) {
                (Some(a), Some(b)) => a <= b,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            self.extend(if take_old { old.next() } else { new.next() });
        }
    }
}
