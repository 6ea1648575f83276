//! Binary search on sorted slices.

use thiserror::Error;


#[derive(Debug, Error)]
pub enum SearchError {
    #[error("cannot search an empty sequence")]
    EmptySequence,
}


/// First index `k` of the non-decreasing slice `l` with `l[k] >= v`.
///
/// Returns `l.len()` when every element is `< v`. The slice ordering is not
/// checked; an unsorted slice gives an unspecified index.
///
/// ```
/// use tributary::search::bisect_geq;
///
/// let l = [1.0, 2.0, 2.0, 5.0];
/// assert_eq!(bisect_geq(&l, 2.0).unwrap(), 1);
/// assert_eq!(bisect_geq(&l, 9.0).unwrap(), 4);
/// ```
pub fn bisect_geq<T>(l: &[T], v: T) -> Result<usize, SearchError>
where T: PartialOrd {
    if l.is_empty() {
        return Err(SearchError::EmptySequence);
    }
    Ok(l.partition_point(|x| *x < v))
}
