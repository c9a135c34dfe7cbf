use alloc::vec::Vec;

/// Returns a new `Vec` where element `i` is `f(&seq[i], i, seq)`, same
/// length and order as the input.
///
/// Returns an empty `Vec` for empty input. `f` receives the element, its
/// index, and the full sequence, and may produce a different type.
///
/// # Examples
///
/// ```
/// use plain_seq::map;
///
/// let nums = [10, 20, 30];
/// assert_eq!(map(&nums, |e, _, _| e + 1), vec![11, 21, 31]);
/// assert_eq!(map(&nums, |e, _, _| e.to_string()), vec!["10", "20", "30"]);
/// ```
pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut out = Vec::with_capacity(seq.len());
    for i in 0..seq.len() {
        out.push(f(&seq[i], i, seq));
    }
    out
}
