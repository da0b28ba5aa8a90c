use super::IReminderRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Collection, Database,
};
use medireminder_domain::{Reminder, ReminderKind, ID};
use serde::{Deserialize, Serialize};

pub struct MongoReminderRepo {
    collection: Collection<Document>,
}

impl MongoReminderRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("reminders"),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for MongoReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        mongo_repo::bulk_insert::<_, ReminderMongo>(&self.collection, reminders).await
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        mongo_repo::find::<_, ReminderMongo>(&self.collection, &reminder_id.as_string()).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let options = FindOptions::builder().sort(doc! { "send_at": -1 }).build();
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, doc! {}, Some(options))
            .await
    }

    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "sent": false,
            "send_at": {
                "$lte": now
            }
        };
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, filter, None).await
    }

    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<()> {
        let filter = mongo_repo::get_id_filter(&reminder_id.as_string());
        let update = doc! {
            "$set": {
                "sent": true
            }
        };
        mongo_repo::update_one(&self.collection, filter, update).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    _id: ID,
    name: Option<String>,
    phone: String,
    #[serde(flatten)]
    kind: ReminderKind,
    send_at: i64,
    sent: bool,
    created: i64,
}

impl MongoDocument<Reminder> for ReminderMongo {
    fn to_domain(self) -> Reminder {
        Reminder {
            id: self._id,
            name: self.name,
            phone: self.phone,
            kind: self.kind,
            send_at: self.send_at,
            sent: self.sent,
            created: self.created,
        }
    }

    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            _id: reminder.id.clone(),
            name: reminder.name.clone(),
            phone: reminder.phone.clone(),
            kind: reminder.kind.clone(),
            send_at: reminder.send_at,
            sent: reminder.sent,
            created: reminder.created,
        }
    }
}
