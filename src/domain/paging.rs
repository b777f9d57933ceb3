use super::SortOrder;
use std::str::FromStr;

/// A column a page can be ordered by, named the way clients spell it.
pub trait SortField: FromStr<Err = String> + Copy {
    fn as_str(&self) -> &'static str;
}

/// A request for one zero-based page of results, optionally sorted by `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<S> {
    pub number: u64,
    pub size: u64,
    pub sort: Option<(S, SortOrder)>,
}

impl<S> PageRequest<S> {
    #[must_use]
    pub const fn new(number: u64, size: u64) -> Self {
        Self {
            number,
            size,
            sort: None,
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, field: S, order: SortOrder) -> Self {
        self.sort = Some((field, order));
        self
    }

    /// Row offset of the first item, or `None` when it does not fit a SQL
    /// `OFFSET` (a signed 64-bit integer).
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        self.number
            .checked_mul(self.size.max(1))
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}

impl<S: SortField> PageRequest<S> {
    /// The `sort=field,dir` value that reproduces this ordering.
    #[must_use]
    pub fn sort_param(&self) -> Option<String> {
        self.sort
            .map(|(field, order)| format!("{},{}", field.as_str(), order.as_str()))
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 0
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    /// Index of the last page; `0` when there are no results.
    #[must_use]
    pub const fn last_number(&self) -> u64 {
        self.total_pages.saturating_sub(1)
    }
}

/// Properties a page of ratings can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSort {
    Id,
    Score,
    CustomerId,
    Comment,
}

impl SortField for RatingSort {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Score => "score",
            Self::CustomerId => "customerId",
            Self::Comment => "comment",
        }
    }
}

impl FromStr for RatingSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "score" => Ok(Self::Score),
            "customerId" | "customer_id" => Ok(Self::CustomerId),
            "comment" => Ok(Self::Comment),
            other => Err(format!("Cannot sort ratings by '{other}'")),
        }
    }
}

/// Properties a page of tours can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourSort {
    Id,
    Title,
    Price,
}

impl SortField for TourSort {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Price => "price",
        }
    }
}

impl FromStr for TourSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "price" => Ok(Self::Price),
            other => Err(format!("Cannot sort tours by '{other}'")),
        }
    }
}
