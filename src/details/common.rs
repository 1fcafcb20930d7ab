pub(crate) fn find_common_prefix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .zip(s2.iter())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

pub(crate) fn find_common_suffix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a_char, b_char)| a_char == b_char)
        .count()
}

/// Strips the common prefix and suffix of both sequences.
///
/// Used ahead of the edit distance calculation, which is unaffected by a
/// shared affix but quadratic in the remaining length.
pub(crate) fn remove_common_affix<'a, 'b, Elem1, Elem2>(
    s1: &'a [Elem1],
    s2: &'b [Elem2],
) -> (&'a [Elem1], &'b [Elem2])
where
    Elem1: PartialEq<Elem2>,
{
    let prefix_len = find_common_prefix(s1, s2);
    let s1 = &s1[prefix_len..];
    let s2 = &s2[prefix_len..];

    let suffix_len = find_common_suffix(s1, s2);
    (&s1[..s1.len() - suffix_len], &s2[..s2.len() - suffix_len])
}
