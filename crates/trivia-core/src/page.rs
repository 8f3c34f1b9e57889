//! Fixed-size pagination over ordered result sets.

/// Items per page, shared by every listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return the 1-based `page` of `items`, clipped to the slice bounds.
///
/// Page 0 is treated as page 1. A page past the end of `items` is empty;
/// listing endpoints decide for themselves whether that is a not-found.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
  let start = page
    .saturating_sub(1)
    .saturating_mul(QUESTIONS_PER_PAGE)
    .min(items.len());
  let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
  &items[start..end]
}
