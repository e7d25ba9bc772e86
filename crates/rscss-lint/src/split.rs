//! Splitting a sequence into runs around separator items.
//!
//! Both splitters take a predicate `(item, index) -> bool` that marks
//! separators. The predicate is `FnMut`, so callers may track state such as
//! bracket depth while scanning.

/// One piece of a [`split_keeping`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a, T> {
    /// A contiguous run of non-separator items. May be empty.
    Run(&'a [T]),
    /// The separator item found between two runs.
    Separator(&'a T),
}

impl<'a, T> Segment<'a, T> {
    /// The items of a run, or `None` for a separator.
    #[must_use]
    pub const fn run(&self) -> Option<&'a [T]> {
        match self {
            Self::Run(items) => Some(items),
            Self::Separator(_) => None,
        }
    }

    /// The separator item, or `None` for a run.
    #[must_use]
    pub const fn separator(&self) -> Option<&'a T> {
        match self {
            Self::Run(_) => None,
            Self::Separator(item) => Some(item),
        }
    }
}

/// Split `items` on separators, keeping each separator between the runs it
/// divides.
///
/// The result alternates `Run, Separator, Run, ...` and always starts and
/// ends with a run, so a separator at either end yields an empty run there.
/// Empty input yields an empty result.
pub fn split_keeping<T, F>(items: &[T], mut is_separator: F) -> Vec<Segment<'_, T>>
where
    F: FnMut(&T, usize) -> bool,
{
    if items.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut start = 0;
    for (index, item) in items.iter().enumerate() {
        if is_separator(item, index) {
            segments.push(Segment::Run(&items[start..index]));
            segments.push(Segment::Separator(item));
            start = index + 1;
        }
    }
    segments.push(Segment::Run(&items[start..]));
    segments
}

/// Split `items` on separators, dropping the separators themselves and any
/// empty runs at the end.
pub fn split_compact<T, F>(items: &[T], is_separator: F) -> Vec<&[T]>
where
    F: FnMut(&T, usize) -> bool,
{
    let mut runs: Vec<&[T]> = split_keeping(items, is_separator)
        .iter()
        .filter_map(Segment::run)
        .collect();
    while runs.last().is_some_and(|run| run.is_empty()) {
        let _ = runs.pop();
    }
    runs
}
