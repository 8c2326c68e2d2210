//! Form submission notification boundary
//!
//! Outbound mail delivery is an external collaborator; this trait is its
//! seam. The default implementation records submissions in the structured
//! log for the on-call relay to pick up, which also keeps form handling
//! working in deployments with no mail transport configured.

use crate::models::{ContactEvent, DatasetEvent};

pub trait Notifier: Send + Sync {
    fn contact_submitted(&self, event: &ContactEvent) -> anyhow::Result<()>;
    fn dataset_submitted(&self, event: &DatasetEvent) -> anyhow::Result<()>;
}

/// Default notifier: structured-log delivery, never fails
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn contact_submitted(&self, event: &ContactEvent) -> anyhow::Result<()> {
        tracing::info!(
            name = %event.name,
            email = %event.email,
            profession = %event.profession,
            "Contact form submitted"
        );
        Ok(())
    }

    fn dataset_submitted(&self, event: &DatasetEvent) -> anyhow::Result<()> {
        tracing::info!(
            name = %event.name,
            email = %event.email,
            organization = %event.organization,
            research_area = %event.research_area,
            "Dataset sharing request submitted"
        );
        Ok(())
    }
}
