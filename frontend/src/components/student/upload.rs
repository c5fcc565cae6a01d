//! Two-step scholarship application form.
//!
//! Step one collects the student details, step two the three documents. The
//! documents go out as one multipart request.

use common::error::ClientError;
use common::model::branch::BRANCHES;
use common::requests::{check_upload_ready, StudentDetails, UploadResponse, DOCUMENT_FIELDS};
use common::routing::Route;
use common::session::Session;
use gloo_console::{error, log};
use web_sys::{File, FormData, HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::identity::store_application_id;
use crate::toast::{toast_error, toast_success};

#[derive(Properties, PartialEq)]
pub struct UploadProps {
    pub api: ApiClient,
    pub session: Session,
    pub navigate: Callback<Route>,
}

pub enum Msg {
    SetName(String),
    SetBranch(String),
    SetRollNo(String),
    Next,
    Back,
    FileSelected(usize, Option<File>),
    Submit,
    Submitted(Result<UploadResponse, ClientError>),
}

pub struct UploadPage {
    name: String,
    branch: String,
    roll_no: String,
    details: Option<StudentDetails>,
    files: [Option<File>; DOCUMENT_FIELDS.len()],
    submitting: bool,
}

fn build_form(details: &StudentDetails, student_id: &str, files: &[Option<File>]) -> Option<FormData> {
    let form = FormData::new().ok()?;
    for (field, value) in details.form_fields(student_id) {
        form.append_with_str(field, value).ok()?;
    }
    for ((field, _), file) in DOCUMENT_FIELDS.iter().zip(files) {
        let file = file.as_ref()?;
        form.append_with_blob_and_filename(field, file, &file.name()).ok()?;
    }
    Some(form)
}

impl Component for UploadPage {
    type Message = Msg;
    type Properties = UploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
            branch: String::new(),
            roll_no: String::new(),
            details: None,
            files: Default::default(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => self.name = name,
            Msg::SetBranch(branch) => self.branch = branch,
            Msg::SetRollNo(roll_no) => self.roll_no = roll_no,
            Msg::Next => match StudentDetails::validate(&self.name, &self.branch, &self.roll_no) {
                Ok(details) => self.details = Some(details),
                Err(e) => toast_error(&e.to_string()),
            },
            Msg::Back => self.details = None,
            Msg::FileSelected(index, file) => {
                if let Some(slot) = self.files.get_mut(index) {
                    *slot = file;
                }
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let Some(details) = &self.details else {
                    return false;
                };
                let selected = self.files.iter().filter(|f| f.is_some()).count();
                let student_id = match check_upload_ready(selected, ctx.props().session.user_id()) {
                    Ok(id) => id,
                    Err(e) => {
                        toast_error(&e.to_string());
                        return false;
                    }
                };
                let Some(form) = build_form(details, &student_id, &self.files) else {
                    toast_error("Could not prepare the upload.");
                    return false;
                };
                self.submitting = true;
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(api.upload_documents(form).await));
                });
            }
            Msg::Submitted(result) => {
                self.submitting = false;
                let navigate = &ctx.props().navigate;
                match result {
                    Ok(response) => {
                        log!(format!("Application {} created", response.application.id));
                        store_application_id(&response.application.id);
                        toast_success("Application added successfully!");
                        navigate.emit(Route::StudentTracking);
                    }
                    Err(ClientError::DuplicateApplication) => {
                        toast_error("Application already exists. Redirecting to application tracking page...");
                        navigate.emit(Route::StudentTracking);
                    }
                    Err(e) => {
                        error!(format!("Error uploading documents: {}", e));
                        toast_error("Failed to submit application.");
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="upload">
                <h1 class="page-title">{ "Apply For Scholarship" }</h1>
                <p class="step">{ if self.details.is_none() { "Step 1 of 2" } else { "Step 2 of 2" } }</p>
                {
                    match &self.details {
                        None => self.details_step(ctx),
                        Some(_) => self.documents_step(ctx),
                    }
                }
            </section>
        }
    }
}

impl UploadPage {
    fn details_step(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <form class="form" onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Next })}>
                <label>
                    { "Name" }
                    <input
                        type="text"
                        value={self.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetName(input.value())
                        })}
                    />
                </label>
                <label>
                    { "Branch" }
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetBranch(select.value())
                    })}>
                        <option value="" selected={self.branch.is_empty()}>{ "Select branch" }</option>
                        {
                            for BRANCHES.iter().map(|&branch| html! {
                                <option value={branch} selected={self.branch == branch}>{ branch }</option>
                            })
                        }
                    </select>
                </label>
                <label>
                    { "Roll No" }
                    <input
                        type="text"
                        value={self.roll_no.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetRollNo(input.value())
                        })}
                    />
                </label>
                <button type="submit" class="outline-btn">{ "Next" }</button>
            </form>
        }
    }

    fn documents_step(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <form class="form" onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                {
                    for DOCUMENT_FIELDS.iter().enumerate().map(|(index, (field, label))| {
                        let on_change = link.callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::FileSelected(index, input.files().and_then(|files| files.get(0)))
                        });
                        html! {
                            <label key={*field}>
                                { *label }
                                <input type="file" name={*field} accept="image/*,application/pdf" onchange={on_change} />
                            </label>
                        }
                    })
                }
                <div class="form-actions">
                    <button type="button" class="outline-btn" onclick={link.callback(|_| Msg::Back)}>
                        { "Back" }
                    </button>
                    <button type="submit" class="outline-btn" disabled={self.submitting}>
                        { if self.submitting { "Submitting..." } else { "Submit" } }
                    </button>
                </div>
            </form>
        }
    }
}
