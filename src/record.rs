use std::{cmp::Ordering, fmt};

/// One dataset entry: a title and its numeric rating.
///
/// Records order by title first and break ties with the rating under
/// `f64::total_cmp`, so two records are equal only when both fields match.
#[derive(Debug, Clone)]
pub struct Record {
    title: String,
    rating: f64,
}

impl Record {
    pub fn new(title: impl Into<String>, rating: f64) -> Record {
        Record {
            title: title.into(),
            rating,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.rating.total_cmp(&other.rating))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1})", self.title, self.rating)
    }
}
