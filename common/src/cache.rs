//! Local copy of the application collection.
//!
//! Records are keyed by id. A write to the service is first staged as a
//! pending change; the record itself is only touched once the service has
//! confirmed the write. A failed write discards the pending change and leaves
//! the record exactly as it was. A later refetch replaces every record so
//! fields the service computes on its side win over the local patch.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::model::application::{Application, ApplicationStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    Sanction { amount: f64 },
    Decision { status: ApplicationStatus, feedback: String },
}

impl PendingChange {
    fn apply(&self, app: &mut Application) {
        match self {
            PendingChange::Sanction { amount } => {
                app.amount_sanction = Some(*amount);
                app.approved_by_finance_head = true;
            }
            PendingChange::Decision { status, feedback } => {
                app.status = *status;
                app.principal_feedback = Some(feedback.clone());
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ApplicationCache {
    records: Vec<Application>,
    pending: HashMap<String, PendingChange>,
}

impl ApplicationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Application>) -> Self {
        Self {
            records,
            pending: HashMap::new(),
        }
    }

    /// Replaces the records with a fresh fetch. Pending changes for ids that
    /// are still present stay pending; the rest are dropped.
    pub fn replace_all(&mut self, fetched: Vec<Application>) {
        self.records = fetched;
        let records = &self.records;
        self.pending
            .retain(|id, _| records.iter().any(|app| &app.id == id));
    }

    pub fn records(&self) -> &[Application] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Application> {
        self.records.iter().find(|app| app.id == id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn pending(&self, id: &str) -> Option<&PendingChange> {
        self.pending.get(id)
    }

    /// Marks `id` dirty until the service answers. Only one write per record
    /// may be in flight.
    pub fn stage(&mut self, id: &str, change: PendingChange) -> Result<(), ValidationError> {
        if self.get(id).is_none() {
            return Err(ValidationError::UnknownApplication(id.to_string()));
        }
        if self.pending.contains_key(id) {
            return Err(ValidationError::UpdateInFlight(id.to_string()));
        }
        self.pending.insert(id.to_string(), change);
        Ok(())
    }

    /// Applies the pending change for `id` to its record.
    pub fn confirm(&mut self, id: &str) -> Option<PendingChange> {
        let change = self.pending.remove(id)?;
        if let Some(app) = self.records.iter_mut().find(|app| app.id == id) {
            change.apply(app);
        }
        Some(change)
    }

    /// Applies an already confirmed change again, after a refetch that may
    /// predate it.
    pub fn reapply(&mut self, id: &str, change: &PendingChange) {
        if let Some(app) = self.records.iter_mut().find(|app| app.id == id) {
            change.apply(app);
        }
    }

    /// Drops the pending change for `id` without touching the record.
    pub fn discard(&mut self, id: &str) -> Option<PendingChange> {
        self.pending.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn app(id: &str) -> Application {
        Application {
            id: id.to_string(),
            student_id: format!("student-{id}"),
            name: format!("Student {id}"),
            roll_no: "R1".into(),
            branch: "Civil Engineering".into(),
            aadhar_card: "a".into(),
            marksheet: "m".into(),
            income_certificate: "i".into(),
            approved_by_hod: true,
            approved_by_principal: true,
            approved_by_finance_head: false,
            hod_feedback: None,
            principal_feedback: None,
            amount_sanction: None,
            status: ApplicationStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn staged_change_is_invisible_until_confirmed() {
        let mut cache = ApplicationCache::from_records(vec![app("a")]);
        cache.stage("a", PendingChange::Sanction { amount: 5000.0 }).unwrap();
        assert!(cache.is_pending("a"));
        assert_eq!(cache.get("a").unwrap().amount_sanction, None);

        cache.confirm("a");
        let record = cache.get("a").unwrap();
        assert_eq!(record.amount_sanction, Some(5000.0));
        assert!(record.approved_by_finance_head);
        assert!(!cache.is_pending("a"));
    }

    #[test]
    fn discard_leaves_record_identical() {
        let mut cache = ApplicationCache::from_records(vec![app("a")]);
        let before = cache.get("a").unwrap().clone();
        cache
            .stage(
                "a",
                PendingChange::Decision {
                    status: ApplicationStatus::Approved,
                    feedback: "ok".into(),
                },
            )
            .unwrap();
        cache.discard("a");
        assert_eq!(cache.get("a").unwrap(), &before);
    }

    #[test]
    fn second_write_while_pending_is_refused() {
        let mut cache = ApplicationCache::from_records(vec![app("a")]);
        cache.stage("a", PendingChange::Sanction { amount: 1.0 }).unwrap();
        assert_eq!(
            cache.stage("a", PendingChange::Sanction { amount: 2.0 }),
            Err(ValidationError::UpdateInFlight("a".into()))
        );
        assert_eq!(
            cache.stage("zz", PendingChange::Sanction { amount: 2.0 }),
            Err(ValidationError::UnknownApplication("zz".into()))
        );
    }

    #[test]
    fn refetch_reconciles_and_prunes_pending() {
        let mut cache = ApplicationCache::from_records(vec![app("a"), app("b")]);
        cache.stage("a", PendingChange::Sanction { amount: 10.0 }).unwrap();
        cache.stage("b", PendingChange::Sanction { amount: 20.0 }).unwrap();

        let mut server_a = app("a");
        server_a.approved_by_finance_head = true;
        server_a.amount_sanction = Some(10.0);
        cache.replace_all(vec![server_a.clone()]);

        assert_eq!(cache.records(), &[server_a]);
        assert!(cache.is_pending("a"));
        assert!(!cache.is_pending("b"));
    }
}
