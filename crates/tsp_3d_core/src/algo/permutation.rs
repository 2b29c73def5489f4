/// Advances `perm` to the next permutation in lexicographic order.
///
/// Returns `false` and leaves `perm` as the last (descending) permutation when
/// no greater one exists. Starting from the identity, repeated calls visit
/// every permutation exactly once.
pub(crate) fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    // Rightmost ascent.
    let Some(pivot) = (0..n - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };

    // The suffix after `pivot` is non-increasing, so the rightmost element
    // greater than the pivot is the smallest such element.
    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| perm[j] > perm[pivot])
        .unwrap_or(pivot + 1);

    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}
