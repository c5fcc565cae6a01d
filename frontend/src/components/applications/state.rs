use chrono::FixedOffset;
use common::table::ApplicationsTable;
use gloo_timers::callback::Interval;
use yew::NodeRef;

use crate::components::viewer_offset;

pub struct ApplicationsPage {
    pub table: ApplicationsTable,

    /// Top sheet showing the documents of `documents_for`.
    pub document_dialog_ref: NodeRef,
    pub documents_for: Option<String>,

    /// Periodic refetch; dropping it cancels the timer.
    pub refresh: Option<Interval>,

    pub offset: FixedOffset,
}

impl ApplicationsPage {
    pub fn new() -> Self {
        Self {
            table: ApplicationsTable::new(),
            document_dialog_ref: NodeRef::default(),
            documents_for: None,
            refresh: None,
            offset: viewer_offset(),
        }
    }
}
