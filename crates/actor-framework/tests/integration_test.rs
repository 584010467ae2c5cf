use actor_framework::store::{JsonFileStore, MemoryStore, UnavailableStore};
use actor_framework::{ActorEntity, DocumentStore, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Shelf {
    id: u32,
    label: String,
    boxes: i64,
}

#[derive(Debug)]
struct ShelfCreate {
    label: String,
    boxes: i64,
}

#[derive(Debug)]
enum ShelfAction {
    Take(i64),
    Relabel(String),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum ShelfError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("only {0} boxes left")]
    NotEnough(i64),
}

#[async_trait]
impl ActorEntity for Shelf {
    type Id = u32;
    type Create = ShelfCreate;
    type Action = ShelfAction;
    type ActionResult = i64;
    type Context = ();
    type Error = ShelfError;
    const COLLECTION: &'static str = "shelves";

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
        if params.label.trim().is_empty() {
            return Err(ShelfError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            boxes: params.boxes,
        })
    }

    async fn handle_action(
        &mut self,
        action: ShelfAction,
        _ctx: &Self::Context,
    ) -> Result<i64, Self::Error> {
        match action {
            ShelfAction::Take(n) => {
                if self.boxes < n {
                    return Err(ShelfError::NotEnough(self.boxes));
                }
                self.boxes -= n;
                Ok(self.boxes)
            }
            ShelfAction::Relabel(label) => {
                self.label = label;
                Ok(self.boxes)
            }
        }
    }
}

fn spawn_shelves(store: Arc<dyn DocumentStore>, first_id: u32) -> ResourceClient<Shelf> {
    let mut next = first_id;
    let (actor, client) = ResourceActor::<Shelf>::new(10, store, move || {
        let id = next;
        next += 1;
        id
    });
    tokio::spawn(actor.run(()));
    client
}

fn shelf(label: &str, boxes: i64) -> ShelfCreate {
    ShelfCreate {
        label: label.to_string(),
        boxes,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_full_lifecycle() {
    let client = spawn_shelves(Arc::new(MemoryStore::default()), 1);

    // 1. Create
    let a = client.create(shelf("A", 5)).await.unwrap();
    let b = client.create(shelf("B", 2)).await.unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);

    // 2. List keeps insertion order
    let labels: Vec<_> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, ["A", "B"]);

    // 3. Action
    assert_eq!(client.perform_action(1, ShelfAction::Take(3)).await.unwrap(), 2);
    client
        .perform_action(1, ShelfAction::Relabel("A1".to_string()))
        .await
        .unwrap();
    let a = client.get(1).await.unwrap().unwrap();
    assert_eq!((a.label.as_str(), a.boxes), ("A1", 2));

    // 4. Delete, twice
    assert!(client.delete(1).await.unwrap());
    assert!(!client.delete(1).await.unwrap());
    assert!(client.get(1).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rejected_create_and_action_leave_state_untouched() {
    let client = spawn_shelves(Arc::new(MemoryStore::default()), 1);

    let err = client.create(shelf("  ", 1)).await.unwrap_err();
    assert_eq!(err.downcast_entity::<ShelfError>().unwrap(), ShelfError::EmptyLabel);
    assert!(client.list().await.unwrap().is_empty());

    let s = client.create(shelf("C", 1)).await.unwrap();
    let err = client
        .perform_action(s.id, ShelfAction::Take(4))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<ShelfError>().unwrap(), ShelfError::NotEnough(1));
    assert_eq!(client.get(s.id).await.unwrap().unwrap().boxes, 1);
}

#[tokio::test]
async fn test_action_on_missing_entity() {
    let client = spawn_shelves(Arc::new(MemoryStore::default()), 1);
    let err = client
        .perform_action(99, ShelfAction::Take(1))
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "99"));
}

#[tokio::test]
async fn test_queued_actions_apply_one_at_a_time() {
    let client = spawn_shelves(Arc::new(MemoryStore::default()), 1);
    let s = client.create(shelf("D", 5)).await.unwrap();

    let first = client.perform_action(s.id, ShelfAction::Take(4));
    let second = client.perform_action(s.id, ShelfAction::Take(4));
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.unwrap(), 1);
    assert!(second.is_err());
    assert_eq!(client.get(s.id).await.unwrap().unwrap().boxes, 1);
}

#[tokio::test]
async fn test_rehydrates_from_file_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store: Arc<dyn DocumentStore> = Arc::new(JsonFileStore::open(dir.path()).await.unwrap());
        let client = spawn_shelves(store, 1);
        client.create(shelf("E", 3)).await.unwrap();
        client.create(shelf("F", 4)).await.unwrap();
        client.perform_action(1, ShelfAction::Take(1)).await.unwrap();
        client.delete(2).await.unwrap();
        client.create(shelf("G", 6)).await.unwrap();
    }

    let store: Arc<dyn DocumentStore> = Arc::new(JsonFileStore::open(dir.path()).await.unwrap());
    let client = spawn_shelves(store, 10);
    let shelves = client.list().await.unwrap();
    assert_eq!(
        shelves,
        vec![
            Shelf {
                id: 1,
                label: "E".to_string(),
                boxes: 2
            },
            Shelf {
                id: 3,
                label: "G".to_string(),
                boxes: 6
            },
        ]
    );
}

#[tokio::test]
async fn test_unavailable_store_rejects_every_request() {
    let client = spawn_shelves(Arc::new(UnavailableStore::new("connection refused")), 1);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FrameworkError::Storage(_)));
    assert!(err.to_string().contains("connection refused"));

    assert!(matches!(
        client.create(shelf("H", 1)).await,
        Err(FrameworkError::Storage(_))
    ));
    assert!(matches!(client.delete(1).await, Err(FrameworkError::Storage(_))));
}
