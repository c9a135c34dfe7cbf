use alloc::vec::Vec;

/// Returns borrows of every element for which `pred` returns `true`, in the
/// original relative order.
///
/// Returns an empty `Vec` (not [`None`]) when no element matches or `seq`
/// is empty. The input is never mutated. `pred` receives the element, its
/// index, and the full sequence.
///
/// # Examples
///
/// ```
/// use plain_seq::filter;
///
/// let nums = [10, 20, 30];
/// assert_eq!(filter(&nums, |e, _, _| *e >= 20), vec![&20, &30]);
/// assert_eq!(filter(&nums, |e, _, _| *e < 0), Vec::<&i32>::new());
/// ```
pub fn filter<'a, T, P>(seq: &'a [T], mut pred: P) -> Vec<&'a T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let mut kept = Vec::new();
    for i in 0..seq.len() {
        let element = &seq[i];
        if pred(element, i, seq) {
            kept.push(element);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn keeps_matching_elements_in_order() {
        let seq = [10, 20, 30];
        assert_eq!(filter(&seq, |e, _, _| *e >= 20), vec![&20, &30]);
        assert_eq!(filter(&seq, |e, _, _| *e > 25), vec![&30]);
    }

    #[test]
    fn empty_when_nothing_matches() {
        let seq = [10, 20, 30];
        assert!(filter(&seq, |e, _, _| *e < 0).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let seq: [i32; 0] = [];
        assert!(filter(&seq, |_, _, _| true).is_empty());
    }

    #[test]
    fn output_never_longer_than_input() {
        let seq = [1, 1, 2, 3, 5, 8];
        assert!(filter(&seq, |_, _, _| true).len() <= seq.len());
        assert_eq!(filter(&seq, |_, _, _| true).len(), seq.len());
    }

    #[test]
    fn callback_sees_index_and_sequence() {
        let seq = [4, 5, 6];
        // Keep elements at even indices, checked against the full sequence.
        let kept = filter(&seq, |e, i, s| s[i] == *e && i % 2 == 0);
        assert_eq!(kept, vec![&4, &6]);
    }

    #[test]
    fn does_not_use_the_std_adapter() {
        let source = include_str!("filter.rs");
        let needle = [".", "filter", "("].concat();
        assert!(!source.contains(&needle));
    }
}
