use common::error::ClientError;
use common::generation::Ticket;
use common::model::application::Application;
use common::table::PageSize;

pub enum Msg {
    Load,
    Loaded(Ticket, Result<Vec<Application>, ClientError>),
    SetSearch(String),
    SetPageSize(PageSize),
    SetPage(usize),
    AmountInput { id: String, raw: String },
    Sanction(String),
    FeedbackInput { id: String, text: String },
    SubmitFeedback(String),
    Decide { id: String, approve: bool },
    WriteFinished { id: String, result: Result<(), ClientError> },
    ShowDocuments(String),
    CloseDocuments,
}
