#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use common::api::{Endpoint, Method};
use common::error::ClientError;
use common::model::application::{Application, ApplicationStatus};
use common::model::notification::Notification;
use common::requests::{FinanceApproval, NewNotification, PrincipalApproval};

pub fn application(id: &str, name: &str) -> Application {
    Application {
        id: id.to_string(),
        student_id: format!("user_{id}"),
        name: name.to_string(),
        roll_no: format!("R-{id}"),
        branch: "Mechanical Engineering".to_string(),
        aadhar_card: format!("https://media.example/{id}/aadhar.png"),
        marksheet: format!("https://media.example/{id}/marksheet.png"),
        income_certificate: format!("https://media.example/{id}/income.png"),
        approved_by_hod: true,
        approved_by_principal: true,
        approved_by_finance_head: false,
        hod_feedback: None,
        principal_feedback: None,
        amount_sanction: None,
        status: ApplicationStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2024, 7, 15, 11, 0, 0).unwrap(),
    }
}

/// In-memory stand-in for the scholarship service that records every request.
#[derive(Default)]
pub struct FakeGateway {
    pub applications: Vec<Application>,
    pub fail_writes: bool,
    pub requests: Vec<(Method, String)>,
    next_notification: u32,
}

impl FakeGateway {
    pub fn with(applications: Vec<Application>) -> Self {
        Self {
            applications,
            ..Self::default()
        }
    }

    fn record(&mut self, endpoint: Endpoint) {
        self.requests.push((endpoint.method(), endpoint.path()));
    }

    pub fn count(&self, method: Method) -> usize {
        self.requests.iter().filter(|(m, _)| *m == method).count()
    }

    pub fn fetch_applications(&mut self) -> Result<Vec<Application>, ClientError> {
        self.record(Endpoint::Applications);
        Ok(self.applications.clone())
    }

    pub fn approve_finance_head(
        &mut self,
        id: &str,
        body: &FinanceApproval,
    ) -> Result<(), ClientError> {
        self.record(Endpoint::ApproveFinanceHead(id.to_string()));
        if self.fail_writes {
            return Err(ClientError::Status {
                status: 500,
                message: "Internal Server Error".into(),
            });
        }
        if let Some(app) = self.applications.iter_mut().find(|a| a.id == id) {
            app.approved_by_finance_head = body.approve;
            app.amount_sanction = Some(body.amount);
        }
        Ok(())
    }

    pub fn approve_principal(
        &mut self,
        id: &str,
        body: &PrincipalApproval,
    ) -> Result<(), ClientError> {
        self.record(Endpoint::ApprovePrincipal(id.to_string()));
        if self.fail_writes {
            return Err(ClientError::Transport("connection reset".into()));
        }
        if let Some(app) = self.applications.iter_mut().find(|a| a.id == id) {
            app.approved_by_principal = body.approve;
            app.principal_feedback = Some(body.principal_feedback.clone());
            app.status = if body.approve {
                ApplicationStatus::Approved
            } else {
                ApplicationStatus::Rejected
            };
        }
        Ok(())
    }

    pub fn post_notification(&mut self, body: &NewNotification) -> Result<Notification, ClientError> {
        self.record(Endpoint::PostNotification);
        self.next_notification += 1;
        Ok(Notification {
            id: format!("n-{}", self.next_notification),
            user_id: Some(body.user_id.clone()),
            title: body.title.clone(),
            message: body.message.clone(),
            is_admin: body.is_admin,
            sender_role: None,
            created_at: Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap(),
        })
    }
}
