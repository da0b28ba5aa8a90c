use crate::{
    reminder::send_due_reminders::{DispatchReport, SendDueRemindersUseCase},
    shared::usecase::execute,
};
use medireminder_infra::MediContext;
use std::time::Duration;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::info;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

pub fn start_send_reminders_job(ctx: MediContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        sleep(Duration::from_secs(secs_to_next_run as u64)).await;

        let mut dispatch_interval = interval(ctx.config.dispatch_interval);
        // A run that takes longer than the interval swallows the ticks it missed
        dispatch_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            dispatch_interval.tick().await;
            // Awaited here and not spawned, so runs never overlap
            send_due_reminders(&ctx).await;
        }
    });
}

/// Runs one dispatch of due reminders. Errors are logged by the use case.
pub async fn send_due_reminders(ctx: &MediContext) -> Option<DispatchReport> {
    let report = execute(SendDueRemindersUseCase {}, ctx).await.ok()?;
    if report.total() > 0 {
        info!(
            "Reminders dispatched at {}: {} sent, {} skipped, {} failed",
            ctx.sys.get_timestamp_millis(),
            report.sent,
            report.skipped,
            report.failed
        );
    }
    Some(report)
}
