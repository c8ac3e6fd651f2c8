//! Row filtering
//!
//! [`FilterConditions`] is a set of independent, optional predicates. The
//! present ones are combined with logical AND; absent ones impose no
//! constraint. With no predicate at all the whole dataset is returned as is.

use crate::error::{Error, Result};
use crate::model::{Dataset, SalesRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Inclusive date bounds with `start_date <= end_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = Error;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        DateRange::new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if start_date > end_date {
            return Err(Error::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whether `date` lies within the bounds, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

// ---------------------------------------------------------------------------
// FilterConditions
// ---------------------------------------------------------------------------

/// Optional row predicates, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConditions {
    pub date_range: Option<DateRange>,
    pub category: Option<BTreeSet<String>>,
    pub product_ids: Option<BTreeSet<u64>>,
}

impl FilterConditions {
    /// Conditions that select every row
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_product_ids<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.product_ids = Some(ids.into_iter().collect());
        self
    }

    /// Whether no predicate is present
    pub fn is_empty(&self) -> bool {
        self.date_range.is_none() && self.category.is_none() && self.product_ids.is_none()
    }

    /// Reject product ids that are not positive
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = self.product_ids.iter().flatten().find(|&&id| id == 0) {
            return Err(Error::InvalidProductId(*id));
        }
        Ok(())
    }

    /// The present predicates
    pub fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut predicates = Vec::with_capacity(3);
        if let Some(range) = self.date_range {
            predicates.push(Predicate::DateRange(range));
        }
        if let Some(ids) = &self.product_ids {
            predicates.push(Predicate::ProductIds(ids));
        }
        if let Some(categories) = &self.category {
            predicates.push(Predicate::Category(categories));
        }
        predicates
    }

    /// Whether a record satisfies every present predicate
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.predicates().iter().all(|p| p.matches(record))
    }
}

/// A single row predicate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate<'c> {
    /// Date within bounds; rows without a date never match
    DateRange(DateRange),
    /// Category is one of the given values
    Category(&'c BTreeSet<String>),
    /// Product id is one of the given ids; rows without an id never match
    ProductIds(&'c BTreeSet<u64>),
}

impl Predicate<'_> {
    pub fn matches(&self, record: &SalesRecord) -> bool {
        match self {
            Predicate::DateRange(range) => record.date.is_some_and(|d| range.contains(d)),
            Predicate::Category(categories) => categories.contains(&record.category),
            Predicate::ProductIds(ids) => record.product_id.is_some_and(|id| ids.contains(&id)),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection – the filter result
// ---------------------------------------------------------------------------

/// Rows selected from a dataset, borrowed from it
#[derive(Debug, Clone)]
pub enum Selection<'a> {
    /// Every row, without copying
    All(&'a [SalesRecord]),
    /// The matching rows, in dataset order
    Matched(Vec<&'a SalesRecord>),
}

impl<'a> Selection<'a> {
    pub fn len(&self) -> usize {
        match self {
            Selection::All(rows) => rows.len(),
            Selection::Matched(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> SelectionIter<'a, '_> {
        match self {
            Selection::All(rows) => SelectionIter::All(rows.iter()),
            Selection::Matched(rows) => SelectionIter::Matched(rows.iter()),
        }
    }
}

/// Iterator over the rows of a [`Selection`]
#[derive(Debug, Clone)]
pub enum SelectionIter<'a, 's> {
    All(std::slice::Iter<'a, SalesRecord>),
    Matched(std::slice::Iter<'s, &'a SalesRecord>),
}

impl<'a> Iterator for SelectionIter<'a, '_> {
    type Item = &'a SalesRecord;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SelectionIter::All(iter) => iter.next(),
            SelectionIter::Matched(iter) => iter.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SelectionIter::All(iter) => iter.size_hint(),
            SelectionIter::Matched(iter) => iter.size_hint(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Select the rows of `dataset` that satisfy every present condition
///
/// Absent or empty conditions short-circuit to [`Selection::All`].
pub fn filter<'a>(dataset: &'a Dataset, conditions: Option<&FilterConditions>) -> Selection<'a> {
    let predicates = conditions.map(FilterConditions::predicates).unwrap_or_default();
    if predicates.is_empty() {
        return Selection::All(dataset.records());
    }

    let matched = select(dataset.records(), &predicates);
    debug!(
        predicates = predicates.len(),
        matched = matched.len(),
        total = dataset.len(),
        "filtered dataset"
    );
    Selection::Matched(matched)
}

#[cfg(not(feature = "parallel"))]
fn select<'a>(records: &'a [SalesRecord], predicates: &[Predicate<'_>]) -> Vec<&'a SalesRecord> {
    records
        .iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect()
}

#[cfg(feature = "parallel")]
fn select<'a>(records: &'a [SalesRecord], predicates: &[Predicate<'_>]) -> Vec<&'a SalesRecord> {
    use rayon::prelude::*;

    // Collecting an indexed source keeps dataset order
    records
        .par_iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect()
}
