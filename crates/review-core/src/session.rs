//! Review session controller.
//!
//! A [`ReviewSession`] owns everything mutable about one review sitting: the
//! active criteria, the filtered view they produce, the current selection,
//! and the coding store. Presentation code reads its observable state and
//! issues commands; it never touches the corpus or the store directly.
//!
//! # Selection
//!
//! - `set_criteria` recomputes the view and drops a selection the new view no
//!   longer contains.
//! - `select` accepts any corpus document, even one outside the view.
//! - `next`/`prev` move within the view only and clamp at both ends.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use review_corpus::{Corpus, Facets};
use review_model::{CodingDraft, CodingRecord, DocId, Document, FilterCriteria};
use review_output::{CsvExport, export_coding};
use review_store::{BlobStore, Clock, CodingStore, ResetOutcome, SystemClock};

use crate::error::{Result, ReviewError};
use crate::filter::filter_indices;
use crate::shortcuts::{Focus, NavCommand, shortcut};

/// Placeholder summary for documents without coding.
pub const UNCODED_SUMMARY: &str = "—";

/// Counts shown alongside the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub shown: usize,
    pub total: usize,
    pub coded: usize,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} documents shown, {} coded",
            self.shown, self.total, self.coded
        )
    }
}

pub struct ReviewSession<B, C = SystemClock> {
    corpus: Corpus,
    store: CodingStore<B, C>,
    criteria: FilterCriteria,
    /// Corpus indices of the filtered view, ascending.
    view: Vec<usize>,
    selected: Option<DocId>,
}

impl<B: BlobStore, C: Clock> ReviewSession<B, C> {
    /// Start a session over the unfiltered corpus with the first document
    /// selected (or nothing, for an empty corpus).
    pub fn new(corpus: Corpus, store: CodingStore<B, C>) -> Self {
        let view: Vec<usize> = (0..corpus.len()).collect();
        let selected = corpus.documents().first().map(|doc| doc.id.clone());
        debug!(
            total = corpus.len(),
            coded = store.coded_count(),
            "review session started"
        );
        Self {
            corpus,
            store,
            criteria: FilterCriteria::default(),
            view,
            selected,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn store(&self) -> &CodingStore<B, C> {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn facets(&self) -> Facets {
        self.corpus.facets()
    }

    /// Replace the criteria and recompute the view.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.view = filter_indices(self.corpus.documents(), &criteria);
        self.criteria = criteria;
        if let Some(id) = &self.selected
            && self.view_position(id).is_none()
        {
            debug!(doc_id = %id, "selection left the filtered view");
            self.selected = None;
        }
        debug!(
            shown = self.view.len(),
            total = self.corpus.len(),
            "filtered view recomputed"
        );
    }

    pub fn clear_criteria(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Documents in the filtered view, in corpus order.
    pub fn filtered_view(&self) -> impl Iterator<Item = &Document> + '_ {
        self.view.iter().map(|&index| &self.corpus.documents()[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    pub fn selected_id(&self) -> Option<&DocId> {
        self.selected.as_ref()
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.selected.as_ref().and_then(|id| self.corpus.get(id))
    }

    /// Position of the selection within the filtered view.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|id| self.view_position(id))
    }

    /// Select a corpus document, or clear the selection with `None`.
    ///
    /// Ids outside the corpus are rejected and leave the selection as it was.
    pub fn select(&mut self, id: Option<&DocId>) -> Result<()> {
        match id {
            None => {
                self.selected = None;
            }
            Some(id) if self.corpus.contains(id) => {
                self.selected = Some(id.clone());
            }
            Some(id) => return Err(ReviewError::UnknownDocument(id.clone())),
        }
        debug!(selected = ?self.selected, "selection changed");
        Ok(())
    }

    /// Advance within the view, clamping at the last document.
    pub fn next(&mut self) -> Option<&DocId> {
        if let Some(last) = self.view.len().checked_sub(1) {
            let target = match self.selected_index() {
                None => 0,
                Some(index) => (index + 1).min(last),
            };
            self.select_view_index(target);
        }
        self.selected.as_ref()
    }

    /// Retreat within the view, clamping at the first document.
    pub fn prev(&mut self) -> Option<&DocId> {
        if !self.view.is_empty() {
            let target = self.selected_index().map_or(0, |index| index.saturating_sub(1));
            self.select_view_index(target);
        }
        self.selected.as_ref()
    }

    /// Apply a key press. Returns true if it was a navigation shortcut.
    pub fn handle_key(&mut self, key: char, focus: Focus) -> bool {
        match shortcut(key, focus) {
            Some(NavCommand::Next) => {
                self.next();
                true
            }
            Some(NavCommand::Prev) => {
                self.prev();
                true
            }
            None => false,
        }
    }

    pub fn coding_for(&self, id: &DocId) -> Option<&CodingRecord> {
        self.store.get(id)
    }

    /// `"{resp} / {priv}"` for coded documents, a dash otherwise.
    pub fn coding_summary(&self, id: &DocId) -> String {
        self.store
            .get(id)
            .map_or_else(|| UNCODED_SUMMARY.to_string(), CodingRecord::summary)
    }

    /// Coding form contents for the current selection: the stored record,
    /// or an unreviewed blank form.
    pub fn form_for_selection(&self) -> Option<CodingDraft> {
        let id = self.selected.as_ref()?;
        Some(self.store.get(id).map(CodingDraft::from).unwrap_or_default())
    }

    /// Save the form for the selected document.
    ///
    /// Without a selection this is a no-op returning `Ok(None)`.
    pub fn save_coding(&mut self, draft: CodingDraft) -> Result<Option<&CodingRecord>> {
        let Some(id) = self.selected.clone() else {
            debug!("save ignored: no document selected");
            return Ok(None);
        };
        let record = self.store.save(&id, draft)?;
        Ok(Some(record))
    }

    /// Clear all coding once `confirm` agrees.
    pub fn reset_all<F>(&mut self, confirm: F) -> Result<ResetOutcome>
    where
        F: FnOnce() -> bool,
    {
        Ok(self.store.reset_all(confirm)?)
    }

    /// Export every corpus document with its coding, dated today (UTC).
    pub fn export_csv(&self) -> Result<CsvExport> {
        self.export_csv_as_of(self.store.clock().now().date_naive())
    }

    pub fn export_csv_as_of(&self, today: NaiveDate) -> Result<CsvExport> {
        Ok(export_coding(
            self.corpus.documents(),
            self.store.records(),
            today,
        )?)
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            shown: self.view.len(),
            total: self.corpus.len(),
            coded: self.store.coded_count(),
        }
    }

    fn view_position(&self, id: &DocId) -> Option<usize> {
        let corpus_index = self.corpus.position(id)?;
        self.view.binary_search(&corpus_index).ok()
    }

    fn select_view_index(&mut self, index: usize) {
        let doc = &self.corpus.documents()[self.view[index]];
        self.selected = Some(doc.id.clone());
        debug!(doc_id = %doc.id, position = index, "navigated");
    }
}
