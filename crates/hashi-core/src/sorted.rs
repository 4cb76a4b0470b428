//! Helpers for keeping vectors sorted.

/// Inserts `value` into an already sorted vector so that it stays sorted.
///
/// The value is placed after any elements that compare equal to it, so repeated
/// insertions are stable. Runs in `O(log n)` comparisons plus the shift.
///
/// # Examples
///
/// ```
/// use hashi_core::sorted::insert_sorted;
///
/// let mut values = vec![1, 3, 3, 7];
/// insert_sorted(&mut values, 3);
/// insert_sorted(&mut values, 0);
/// insert_sorted(&mut values, 9);
/// assert_eq!(values, [0, 1, 3, 3, 3, 7, 9]);
/// ```
pub fn insert_sorted<T: Ord>(values: &mut Vec<T>, value: T) {
    let index = values.partition_point(|existing| existing <= &value);
    values.insert(index, value);
}

/// Removes one element equal to `value` from a sorted vector.
///
/// Returns `true` if an element was removed.
pub fn remove_sorted<T: Ord>(values: &mut Vec<T>, value: &T) -> bool {
    match values.binary_search(value) {
        Ok(index) => {
            values.remove(index);
            true
        }
        Err(_) => false,
    }
}

/// Counts the elements equal to `value` in a sorted slice.
#[must_use]
pub fn count_sorted<T: Ord>(values: &[T], value: &T) -> usize {
    let start = values.partition_point(|existing| existing < value);
    let end = values.partition_point(|existing| existing <= value);
    end - start
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_into_small_list() {
        let mut values = vec![1, 2, 3, 4];
        for value in [0, 1, -4, 4, 8, 6, 3] {
            insert_sorted(&mut values, value);
        }
        assert!(values.is_sorted());
        assert_eq!(values, [-4, 0, 1, 1, 2, 3, 3, 4, 4, 6, 8]);
    }

    #[test]
    fn test_insert_is_stable() {
        // Ordered by `key` only; `tag` records insertion order.
        #[derive(Debug)]
        struct Tagged {
            key: i32,
            tag: u8,
        }
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.key.cmp(&other.key)
            }
        }

        let mut values = vec![Tagged { key: 1, tag: 0 }, Tagged { key: 2, tag: 1 }];
        insert_sorted(&mut values, Tagged { key: 2, tag: 2 });
        insert_sorted(&mut values, Tagged { key: 1, tag: 3 });
        let tags = values.iter().map(|v| v.tag).collect::<Vec<_>>();
        assert_eq!(tags, [0, 3, 1, 2]);
    }

    #[test]
    fn test_remove_and_count() {
        let mut values = vec![1, 2, 2, 2, 5];
        assert_eq!(count_sorted(&values, &2), 3);
        assert_eq!(count_sorted(&values, &3), 0);
        assert!(remove_sorted(&mut values, &2));
        assert_eq!(count_sorted(&values, &2), 2);
        assert!(!remove_sorted(&mut values, &4));
        assert_eq!(values, [1, 2, 2, 5]);
    }

    proptest! {
        #[test]
        fn test_insert_keeps_sorted(inserted in prop::collection::vec(any::<i32>(), 1000)) {
            let mut values = vec![];
            for value in inserted {
                insert_sorted(&mut values, value);
            }
            prop_assert!(values.is_sorted());
            prop_assert_eq!(values.len(), 1000);
        }

        #[test]
        fn test_insert_duplicates_keeps_sorted(
            initial in prop::collection::vec(-5..5i32, 0..20),
            inserted in prop::collection::vec(-5..5i32, 0..50),
        ) {
            let mut values = initial;
            values.sort_unstable();
            for value in &inserted {
                insert_sorted(&mut values, *value);
            }
            prop_assert!(values.is_sorted());
            for value in inserted {
                prop_assert!(count_sorted(&values, &value) >= 1);
            }
        }
    }
}
