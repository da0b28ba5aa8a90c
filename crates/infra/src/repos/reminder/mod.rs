mod inmemory;
mod mongo;

pub use inmemory::InMemoryReminderRepo;
pub use mongo::MongoReminderRepo;
use medireminder_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All `Reminder`s, the one with the latest `send_at` first
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Unsent `Reminder`s with `send_at` at or before `now`, in store order
    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>>;
    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<()>;
}
