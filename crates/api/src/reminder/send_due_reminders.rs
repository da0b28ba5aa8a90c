use crate::shared::usecase::UseCase;
use medireminder_domain::{compose_message, PhoneNumber, Reminder};
use medireminder_infra::{MediContext, OutboundSms};
use tracing::{error, info, warn};

/// Sends every `Reminder` that is due and not yet sent.
///
/// Reminders are handled one at a time and a failing one never stops
/// the rest of the batch. A `Reminder` is only marked as sent after the
/// SMS gateway accepted the message, so failed ones are picked up again
/// by the next run.
#[derive(Debug)]
pub struct SendDueRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    /// Reminders without a usable phone number
    pub skipped: usize,
    pub failed: usize,
}

impl DispatchReport {
    pub fn total(&self) -> usize {
        self.sent + self.skipped + self.failed
    }
}

enum DispatchOutcome {
    Sent,
    Skipped,
    Failed,
}

async fn dispatch_reminder(reminder: &Reminder, ctx: &MediContext) -> DispatchOutcome {
    let to = match PhoneNumber::parse(&reminder.phone) {
        Ok(to) => to,
        Err(e) => {
            warn!("Skipping reminder {}: {}", reminder.id, e);
            return DispatchOutcome::Skipped;
        }
    };

    let sms = OutboundSms {
        to,
        body: compose_message(reminder, &ctx.config.messages),
        sender_id: ctx.config.sms.sender_id.clone(),
    };
    if let Err(e) = ctx.sms.send(&sms).await {
        error!("Unable to send reminder {} to {}: {}", reminder.id, sms.to, e);
        return DispatchOutcome::Failed;
    }

    // Not atomic with the query for due reminders, two runs at the same time
    // could both send the same reminder
    if let Err(e) = ctx.repos.reminders.mark_sent(&reminder.id).await {
        error!(
            "Reminder {} was sent but could not be marked as sent: {:?}",
            reminder.id, e
        );
        return DispatchOutcome::Failed;
    }

    info!("Sent {} reminder {} to {}", reminder.kind.type_name(), reminder.id, sms.to);
    DispatchOutcome::Sent
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = DispatchReport;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &MediContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let reminders = ctx.repos.reminders.find_due(now).await.map_err(|e| {
            error!("Unable to query due reminders: {:?}", e);
            UseCaseErrors::StorageError
        })?;

        let mut report = DispatchReport::default();
        for reminder in &reminders {
            match dispatch_reminder(reminder, ctx).await {
                DispatchOutcome::Sent => report.sent += 1,
                DispatchOutcome::Skipped => report.skipped += 1,
                DispatchOutcome::Failed => report.failed += 1,
            }
        }

        Ok(report)
    }
}
