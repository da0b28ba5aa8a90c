use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use medireminder_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        bulk_insert(reminders, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |_| true);
        reminders.sort_by(|r1, r2| r2.send_at.cmp(&r1.send_at));
        Ok(reminders)
    }

    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |reminder| reminder.is_due(now)))
    }

    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<()> {
        if update(reminder_id, &self.reminders, |reminder| reminder.sent = true) {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Reminder {} was not found", reminder_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medireminder_domain::ReminderKind;

    fn reminder(send_at: i64) -> Reminder {
        Reminder::new(
            None,
            "0712345678".into(),
            ReminderKind::Medication {
                medication: "Metformin".into(),
            },
            send_at,
            0,
        )
    }

    #[tokio::test]
    async fn it_finds_due_reminders() {
        let repo = InMemoryReminderRepo::new();
        let past = reminder(10);
        let now = reminder(20);
        let future = reminder(30);
        repo.bulk_insert(&[past.clone(), now.clone(), future.clone()])
            .await
            .unwrap();

        let due = repo.find_due(20).await.unwrap();
        assert_eq!(due.len(), 2);
        assert!(due.iter().any(|r| r.id == past.id));
        assert!(due.iter().any(|r| r.id == now.id));
        assert!(!due.iter().any(|r| r.id == future.id));
    }

    #[tokio::test]
    async fn it_excludes_sent_reminders_from_due() {
        let repo = InMemoryReminderRepo::new();
        let r = reminder(10);
        repo.insert(&r).await.unwrap();

        repo.mark_sent(&r.id).await.unwrap();
        assert!(repo.find_due(100).await.unwrap().is_empty());
        assert!(repo.find(&r.id).await.unwrap().sent);
    }

    #[tokio::test]
    async fn it_fails_to_mark_unknown_reminder() {
        let repo = InMemoryReminderRepo::new();
        assert!(repo.mark_sent(&ID::default()).await.is_err());
    }

    #[tokio::test]
    async fn it_lists_latest_send_at_first() {
        let repo = InMemoryReminderRepo::new();
        repo.bulk_insert(&[reminder(20), reminder(30), reminder(10)])
            .await
            .unwrap();

        let send_ats = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.send_at)
            .collect::<Vec<_>>();
        assert_eq!(send_ats, vec![30, 20, 10]);
    }
}
