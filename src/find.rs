/// Returns the first element for which `pred` returns `true`, or [`None`]
/// if no element satisfies it (including when `seq` is empty).
///
/// Scans from index 0 upward and stops at the first match; `pred` is not
/// invoked for elements past it. `pred` receives the element, its index,
/// and the full sequence.
///
/// # Examples
///
/// ```
/// use plain_seq::find;
///
/// let nums = [10, 20, 30];
/// assert_eq!(find(&nums, |e, _, _| *e > 25), Some(&30));
/// assert_eq!(find(&nums, |e, _, _| *e < 0), None);
/// ```
pub fn find<'a, T, P>(seq: &'a [T], mut pred: P) -> Option<&'a T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    for i in 0..seq.len() {
        let element = &seq[i];
        if pred(element, i, seq) {
            return Some(element);
        }
    }
    None
}
