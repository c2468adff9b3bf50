//! History matching
//!
//! Finds the earlier point in a history whose preceding moves look most like
//! the moves leading up to now.

/// Look at the last `age` positions of `hist` and return the index that
/// followed the longest run matching the current suffix.
///
/// Among equally long matches the most recent one wins. Returns 0 when no
/// earlier position matches even one move, including when `hist` has fewer
/// than two entries. Index 0 can never follow a match, so it doubles as
/// "nothing found".
pub fn recall<T: PartialEq>(age: usize, hist: &[T]) -> usize {
    let n = hist.len();
    let mut end = 0;
    let mut length = 0;

    for past in 1..(age.saturating_add(1)).min(n.saturating_sub(1)) {
        // A match here can be at most n - past long
        if length >= n - past {
            break;
        }
        let beats_current = (0..=length).all(|k| hist[n - 1 - k - past] == hist[n - 1 - k]);
        if !beats_current {
            continue;
        }
        let mut extended = length + 1;
        while extended < n - past && hist[n - past - extended - 1] == hist[n - extended - 1] {
            extended += 1;
        }
        length = extended;
        end = n - past;
    }

    end
}
