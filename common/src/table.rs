//! Search, pagination and inline actions for the application tables.
//!
//! `TableQuery` is the view-independent part: a case-insensitive name filter,
//! a page size from a fixed set and a 1-based page. `ApplicationsTable` wraps
//! it together with the local `ApplicationCache`, per-row drafts and the load
//! state of one dashboard.

use std::collections::HashMap;

use crate::cache::{ApplicationCache, PendingChange};
use crate::display::Notice;
use crate::error::{ClientError, ValidationError};
use crate::generation::{RequestGeneration, Ticket};
use crate::model::application::{Application, ApplicationStatus};
use crate::requests::{FinanceApproval, PrincipalApproval};

/// Rows that can be matched by the search box.
pub trait Searchable {
    fn search_text(&self) -> &str;
}

impl Searchable for Application {
    fn search_text(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Three,
    Five,
    Ten,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Three, PageSize::Five, PageSize::Ten];

    pub fn rows(&self) -> usize {
        match self {
            PageSize::Three => 3,
            PageSize::Five => 5,
            PageSize::Ten => 10,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(PageSize::Three),
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            other => Err(other),
        }
    }
}

/// "Showing `first` to `last` of `total` entries".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    search: String,
    page_size: PageSize,
    page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page_size: PageSize::default(),
            page: 1,
        }
    }
}

impl TableQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Any change to the query sends the user back to the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn matches<T: Searchable>(&self, row: &T) -> bool {
        self.search.is_empty()
            || row
                .search_text()
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    pub fn filtered<'a, T: Searchable>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }

    /// Start and end offsets of the current page within `len` filtered rows.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let size = self.page_size.rows();
        let start = ((self.page - 1) * size).min(len);
        let end = (self.page * size).min(len);
        (start, end)
    }

    pub fn visible<'a, T: Searchable>(&self, rows: &'a [T]) -> Vec<&'a T> {
        let filtered = self.filtered(rows);
        let (start, end) = self.bounds(filtered.len());
        filtered[start..end].to_vec()
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.rows())
    }

    pub fn summary(&self, len: usize) -> PageSummary {
        let (start, end) = self.bounds(len);
        PageSummary {
            first: if start < end { start + 1 } else { 0 },
            last: end,
            total: len,
        }
    }
}

/// Outcome of a finished load, as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A newer request superseded this one; nothing changed.
    Stale,
    Loaded(usize),
    Failed(ClientError),
    /// The previous load failed too; the viewer has already been told.
    StillFailing(ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FeedbackDraft {
    id: String,
    text: String,
}

/// State behind the finance-head and principal application tables.
#[derive(Debug, Default)]
pub struct ApplicationsTable {
    cache: ApplicationCache,
    query: TableQuery,
    amount_drafts: HashMap<String, String>,
    feedback_draft: Option<FeedbackDraft>,
    loading: bool,
    load_failed: bool,
    generation: RequestGeneration,
    /// Writes the service confirmed while a load was in flight. That load may
    /// carry rows read before the write landed.
    confirmed_during_load: Vec<(String, PendingChange)>,
}

impl ApplicationsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    pub fn cache(&self) -> &ApplicationCache {
        &self.cache
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.loading = true;
        self.confirmed_during_load.clear();
        self.generation.begin()
    }

    /// Applies a fetch result unless a newer load has started since. A failed
    /// load keeps whatever rows were already shown.
    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Application>, ClientError>,
    ) -> LoadOutcome {
        if !self.generation.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        let confirmed = std::mem::take(&mut self.confirmed_during_load);
        match result {
            Ok(records) => {
                let count = records.len();
                self.cache.replace_all(records);
                for (id, change) in &confirmed {
                    self.cache.reapply(id, change);
                }
                self.load_failed = false;
                let pages = self.query.page_count(self.filtered().len()).max(1);
                if self.query.page() > pages {
                    self.query.set_page(pages);
                }
                LoadOutcome::Loaded(count)
            }
            Err(err) if self.load_failed => LoadOutcome::StillFailing(err),
            Err(err) => {
                self.load_failed = true;
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query.set_search(query);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.query.set_page_size(size);
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    pub fn filtered(&self) -> Vec<&Application> {
        self.query.filtered(self.cache.records())
    }

    pub fn visible_rows(&self) -> Vec<&Application> {
        self.query.visible(self.cache.records())
    }

    pub fn page_count(&self) -> usize {
        self.query.page_count(self.filtered().len())
    }

    pub fn summary(&self) -> PageSummary {
        self.query.summary(self.filtered().len())
    }

    /// Zero-based position of the first visible row among the filtered rows.
    pub fn first_index(&self) -> usize {
        self.query.bounds(self.filtered().len()).0
    }

    pub fn set_amount_draft(&mut self, id: &str, raw: impl Into<String>) {
        self.amount_drafts.insert(id.to_string(), raw.into());
    }

    pub fn amount_draft(&self, id: &str) -> &str {
        self.amount_drafts.get(id).map(String::as_str).unwrap_or("")
    }

    /// Validates the typed amount for `id` and stages the sanction. An error
    /// means no request may be sent.
    pub fn request_sanction(&mut self, id: &str) -> Result<FinanceApproval, ValidationError> {
        let amount = parse_amount(self.amount_draft(id))?;
        self.cache.stage(id, PendingChange::Sanction { amount })?;
        Ok(FinanceApproval {
            approve: true,
            amount,
        })
    }

    /// Starts editing the feedback of `id`. Only one row is edited at a time.
    pub fn set_feedback_draft(&mut self, id: &str, text: impl Into<String>) {
        self.feedback_draft = Some(FeedbackDraft {
            id: id.to_string(),
            text: text.into(),
        });
    }

    /// The feedback shown in the row: the draft for the row being edited,
    /// otherwise what the service has stored.
    pub fn feedback_value(&self, id: &str) -> String {
        match &self.feedback_draft {
            Some(draft) if draft.id == id => draft.text.clone(),
            _ => self
                .cache
                .get(id)
                .and_then(|app| app.principal_feedback.clone())
                .unwrap_or_default(),
        }
    }

    pub fn request_decision(
        &mut self,
        id: &str,
        approve: bool,
    ) -> Result<PrincipalApproval, ValidationError> {
        let feedback = self.feedback_value(id);
        let status = if approve {
            ApplicationStatus::Approved
        } else {
            ApplicationStatus::Rejected
        };
        self.cache.stage(
            id,
            PendingChange::Decision {
                status,
                feedback: feedback.clone(),
            },
        )?;
        Ok(PrincipalApproval {
            approve,
            principal_feedback: feedback,
        })
    }

    /// Re-sends the current decision with the edited feedback. Anything not yet
    /// approved goes out as a rejection.
    pub fn submit_feedback(&mut self, id: &str) -> Result<PrincipalApproval, ValidationError> {
        let approved = self
            .cache
            .get(id)
            .map(|app| app.status == ApplicationStatus::Approved)
            .ok_or_else(|| ValidationError::UnknownApplication(id.to_string()))?;
        self.request_decision(id, approved)
    }

    /// Records the service's answer for the write staged on `id`.
    pub fn complete(&mut self, id: &str, result: Result<(), ClientError>) -> Notice {
        match result {
            Ok(()) => match self.confirm(id) {
                Some(PendingChange::Sanction { .. }) => {
                    self.amount_drafts.remove(id);
                    Notice::success("Amount sanctioned successfully.")
                }
                Some(PendingChange::Decision { status, .. }) => {
                    if self.feedback_draft.as_ref().is_some_and(|d| d.id == id) {
                        self.feedback_draft = None;
                    }
                    Notice::success(format!("Application {} successfully.", status.as_str()))
                }
                None => Notice::success("Application updated."),
            },
            Err(_) => match self.cache.discard(id) {
                Some(PendingChange::Sanction { .. }) => Notice::error("Failed to sanction amount."),
                _ => Notice::error("Failed to update application status."),
            },
        }
    }

    fn confirm(&mut self, id: &str) -> Option<PendingChange> {
        let change = self.cache.confirm(id)?;
        if self.loading {
            self.confirmed_during_load.push((id.to_string(), change.clone()));
        }
        Some(change)
    }
}

/// Parses a sanction amount typed by the finance head. Empty, non-numeric,
/// zero and negative values are refused.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or(ValidationError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl Searchable for Row {
        fn search_text(&self) -> &str {
            self.0
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        const NAMES: [&str; 12] = [
            "Asha", "Bilal", "Chitra", "Dev", "Esha", "Farhan", "Gita", "Hari", "Ishaan", "Jaya",
            "Kabir", "Lata",
        ];
        NAMES.iter().take(n).map(|&name| Row(name)).collect()
    }

    #[test]
    fn visible_rows_match_page_formula() {
        for size in PageSize::ALL {
            for n in 0..=12 {
                let data = rows(n);
                for page in 1..=5 {
                    let mut query = TableQuery::default();
                    query.set_page_size(size);
                    query.set_page(page);
                    let p = size.rows() as isize;
                    let expected = p.min(n as isize - (page as isize - 1) * p).max(0) as usize;
                    assert_eq!(query.visible(&data).len(), expected, "p={p} n={n} page={page}");
                }
            }
        }
    }

    #[test]
    fn search_is_case_insensitive_substring_and_resets_page() {
        let data = rows(12);
        let mut query = TableQuery::default();
        query.set_page(3);
        query.set_search("HA");
        assert_eq!(query.page(), 1);
        let names: Vec<_> = query.filtered(&data).iter().map(|r| r.0).collect();
        assert_eq!(names, ["Asha", "Esha", "Farhan", "Hari", "Ishaan"]);
    }

    #[test]
    fn summary_and_page_count() {
        let mut query = TableQuery::default();
        query.set_page_size(PageSize::Five);
        query.set_page(3);
        assert_eq!(query.page_count(12), 3);
        assert_eq!(
            query.summary(12),
            PageSummary {
                first: 11,
                last: 12,
                total: 12
            }
        );
        assert_eq!(
            TableQuery::default().summary(0),
            PageSummary {
                first: 0,
                last: 0,
                total: 0
            }
        );
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        let mut query = TableQuery::default();
        query.set_page(0);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn page_size_only_accepts_fixed_set() {
        assert_eq!(PageSize::try_from(5), Ok(PageSize::Five));
        assert_eq!(PageSize::try_from(4), Err(4));
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount(" 5000 "), Ok(5000.0));
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        for bad in ["", "  ", "0", "-10", "abc", "NaN", "inf"] {
            assert_eq!(parse_amount(bad), Err(ValidationError::InvalidAmount), "{bad:?}");
        }
    }
}
