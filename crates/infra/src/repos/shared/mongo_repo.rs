use anyhow::Result;
use futures::stream::StreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::FindOptions,
    Collection, Cursor,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
}

pub fn get_id_filter(id: &str) -> Document {
    doc! {
        "_id": id
    }
}

pub(crate) fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    bson::to_document(&raw).map_err(anyhow::Error::new)
}

pub(crate) fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    Ok(raw.to_domain())
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    collection.insert_one(doc, None).await?;
    Ok(())
}

pub async fn bulk_insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entities: &[E],
) -> Result<()> {
    // The driver refuses an empty batch
    if entities.is_empty() {
        return Ok(());
    }
    let docs = entities
        .iter()
        .map(|e| entity_to_persistence::<E, D>(e))
        .collect::<Result<Vec<_>>>()?;
    collection.insert_many(docs, None).await?;
    Ok(())
}

pub async fn update_one(
    collection: &Collection<Document>,
    filter: Document,
    update: Document,
) -> Result<()> {
    collection
        .update_one(filter, update, None)
        .await
        .map(|_| ())
        .map_err(anyhow::Error::new)
}

pub async fn find<E, D: MongoDocument<E>>(collection: &Collection<Document>, id: &str) -> Option<E> {
    let filter = get_id_filter(id);
    find_one_by::<E, D>(collection, filter).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Option<E> {
    match collection.find_one(filter, None).await {
        Ok(Some(doc)) => match persistence_to_entity::<E, D>(doc) {
            Ok(e) => Some(e),
            Err(e) => {
                error!("Unable to read document from {}: {:?}", collection.name(), e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            error!("Error querying {}: {:?}", collection.name(), e);
            None
        }
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
    options: Option<FindOptions>,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, options).await?;
    Ok(consume_cursor::<E, D>(collection.name(), cursor).await)
}

async fn consume_cursor<E, D: MongoDocument<E>>(
    collection_name: &str,
    mut cursor: Cursor<Document>,
) -> Vec<E> {
    let mut documents = vec![];
    while let Some(result) = cursor.next().await {
        match result.map_err(anyhow::Error::new).and_then(persistence_to_entity::<E, D>) {
            Ok(entity) => documents.push(entity),
            Err(e) => {
                error!("Error reading cursor for {}: {:?}", collection_name, e);
            }
        }
    }

    documents
}
