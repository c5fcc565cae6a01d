use common::session::Session;
use yew::prelude::*;

use crate::api::ApiClient;

/// Which dashboard the table serves. Decides the columns and the row actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    /// Finance head: sanction an amount per row.
    Sanction,
    /// Principal: approve or reject with feedback.
    Review,
    /// HOD: read-only.
    Browse,
}

impl TableMode {
    pub fn title(&self) -> &'static str {
        match self {
            TableMode::Sanction => "Finance Head Applications",
            TableMode::Review => "Principal Applications",
            TableMode::Browse => "HOD Applications",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ApplicationsProps {
    pub api: ApiClient,
    pub session: Session,
    pub mode: TableMode,
}
