//! Approval progress shown on the student tracking screen.
//!
//! Four independent flags are mapped to four ordered steps. Nothing here
//! enforces ordering between the steps; the service owns that.

use crate::model::application::{Application, ScholarshipStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Hod,
    Principal,
    Finance,
    AmountSanctioned,
}

impl Stage {
    pub const ORDER: [Stage; 4] = [
        Stage::Hod,
        Stage::Principal,
        Stage::Finance,
        Stage::AmountSanctioned,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Hod => "HOD Approval",
            Stage::Principal => "Principal Approval",
            Stage::Finance => "Finance Approval",
            Stage::AmountSanctioned => "Amount Sanctioned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalStep {
    pub stage: Stage,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalProgress {
    steps: [ApprovalStep; 4],
    amount: Option<f64>,
}

impl ApprovalProgress {
    pub fn from_status(status: &ScholarshipStatus) -> Self {
        let completed = |stage: Stage| match stage {
            Stage::Hod => status.approved_by_hod,
            Stage::Principal => status.approved_by_principal,
            Stage::Finance => status.approved_by_finance_head,
            Stage::AmountSanctioned => status.amount_sanction.is_some(),
        };
        Self {
            steps: Stage::ORDER.map(|stage| ApprovalStep {
                stage,
                completed: completed(stage),
            }),
            amount: status.amount_sanction,
        }
    }

    pub fn from_application(app: &Application) -> Self {
        Self::from_status(&app.tracking_status())
    }

    pub fn steps(&self) -> &[ApprovalStep; 4] {
        &self.steps
    }

    /// Whether the connector after step `index` is drawn as done, which is the
    /// case when the following step is completed. There is no connector after
    /// the last step.
    pub fn connector_highlighted(&self, index: usize) -> bool {
        self.steps.get(index + 1).is_some_and(|next| next.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    pub fn sanctioned_amount(&self) -> Option<f64> {
        self.amount
    }
}

impl From<&ScholarshipStatus> for ApprovalProgress {
    fn from(status: &ScholarshipStatus) -> Self {
        Self::from_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(hod: bool, principal: bool, finance: bool, amount: Option<f64>) -> ScholarshipStatus {
        ScholarshipStatus {
            approved_by_hod: hod,
            approved_by_principal: principal,
            approved_by_finance_head: finance,
            amount_sanction: amount,
        }
    }

    #[test]
    fn steps_follow_flags_in_order() {
        let progress = ApprovalProgress::from_status(&status(true, false, false, None));
        let labels: Vec<_> = progress.steps().iter().map(|s| s.stage.label()).collect();
        assert_eq!(
            labels,
            ["HOD Approval", "Principal Approval", "Finance Approval", "Amount Sanctioned"]
        );
        let done: Vec<_> = progress.steps().iter().map(|s| s.completed).collect();
        assert_eq!(done, [true, false, false, false]);
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn amount_step_depends_only_on_amount_presence() {
        let zero = ApprovalProgress::from_status(&status(false, false, false, Some(0.0)));
        assert!(zero.steps()[3].completed);
        assert_eq!(zero.sanctioned_amount(), Some(0.0));
    }

    #[test]
    fn flags_are_independent() {
        let progress = ApprovalProgress::from_status(&status(false, true, false, None));
        assert!(!progress.steps()[0].completed);
        assert!(progress.steps()[1].completed);
    }

    #[test]
    fn connector_tracks_next_step() {
        let progress = ApprovalProgress::from_status(&status(true, true, false, None));
        assert!(progress.connector_highlighted(0));
        assert!(!progress.connector_highlighted(1));
        assert!(!progress.connector_highlighted(2));
        assert!(!progress.connector_highlighted(3));
    }
}
