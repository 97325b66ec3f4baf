/// A sequence that can hand out contiguous subsequences of itself.
///
/// Implemented for slices and for `str`. For `str`, offsets are byte offsets;
/// windows that would cut a multi-byte character apart panic like any other
/// out-of-boundary string slicing.
pub trait Window {
    fn length(&self) -> usize;

    fn window(&self, start: usize, end: usize) -> &Self;
}

impl Window for str {
    fn length(&self) -> usize {
        self.len()
    }

    fn window(&self, start: usize, end: usize) -> &Self {
        &self[start..end]
    }
}

impl<T> Window for [T] {
    fn length(&self) -> usize {
        self.len()
    }

    fn window(&self, start: usize, end: usize) -> &Self {
        &self[start..end]
    }
}

/// Returns a lazy iterator over windows of length `chunk_size` taken at
/// offsets `0, step, 2 * step, ...`, stopping once a full window no longer
/// fits. A `chunk_size` exceeding the sequence length yields nothing.
///
/// The iterator is `Clone`, so a stride can be restarted from scratch.
/// `step` must be nonzero.
pub fn strided<S: Window + ?Sized>(
    sequence: &S,
    chunk_size: usize,
    step: usize,
) -> impl Iterator<Item = &S> + Clone {
    (0..(sequence.length() + 1).saturating_sub(chunk_size))
        .step_by(step)
        .map(move |start| sequence.window(start, start + chunk_size))
}
