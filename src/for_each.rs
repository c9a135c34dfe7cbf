/// Invokes `f` once per element, in index order, for its side effects.
///
/// Returns nothing; there is no accumulation and no short-circuit. `f`
/// receives the element, its index, and the full sequence. On empty input
/// `f` is never invoked.
///
/// # Examples
///
/// ```
/// use plain_seq::for_each;
///
/// let mut total = 0;
/// for_each(&[10, 20, 30], |e, _, _| total += e);
/// assert_eq!(total, 60);
/// ```
pub fn for_each<T, F>(seq: &[T], mut f: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for i in 0..seq.len() {
        f(&seq[i], i, seq);
    }
}
