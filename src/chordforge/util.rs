use std::fmt;

use itertools::Itertools;

pub fn iterable_to_str<I, D>(iterable: I) -> String
    where
        I: IntoIterator<Item = D>,
        D: fmt::Display,
{
    format!("[{}]", iterable.into_iter().join(", "))
}

/// Notes as shown in the result panel, e.g. "C - E - G".
pub fn notes_to_str<I, D>(notes: I) -> String
    where
        I: IntoIterator<Item = D>,
        D: fmt::Display,
{
    notes.into_iter().join(" - ")
}

/// English ordinal for an inversion label: 1st, 2nd, 3rd, 4th, ...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
