use serde::{Deserialize, Serialize};

use tracheo_storage::error::StorageError;
use tracheo_storage::fs::FileStore;
use tracheo_storage::memory::MemoryStore;
use tracheo_storage::state::{load_state, save_state};
use tracheo_storage::store::KeyValueStore;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    section: u8,
    note: String,
}

#[tokio::test]
async fn file_store_round_trips_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.root(), dir.path());

    assert_eq!(store.read("drafts/intake").await.unwrap(), None);

    store.write("drafts/intake", b"first".to_vec()).await.unwrap();
    store.write("drafts/intake", b"second".to_vec()).await.unwrap();
    assert_eq!(store.read("drafts/intake").await.unwrap(), Some(b"second".to_vec()));

    let path = dir.path().join("drafts/intake.json");
    assert!(path.exists());
    assert!(!dir.path().join("drafts/intake.json.tmp").exists());

    store.delete("drafts/intake").await.unwrap();
    assert!(!path.exists());
    // deleting twice is fine
    store.delete("drafts/intake").await.unwrap();
}

#[tokio::test]
async fn file_store_rejects_escaping_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    for key in ["", "../outside", "/etc/passwd", "drafts/../../x"] {
        assert!(
            matches!(store.write(key, Vec::new()).await, Err(StorageError::InvalidKey(_))),
            "{key:?} accepted"
        );
    }
}

#[tokio::test]
async fn memory_store_behaves_like_a_map() {
    let store = MemoryStore::new();
    assert!(store.is_empty().await);
    store.write("a", vec![1]).await.unwrap();
    assert!(store.contains("a").await);
    assert_eq!(store.read("a").await.unwrap(), Some(vec![1]));
    store.delete("a").await.unwrap();
    store.delete("a").await.unwrap();
    assert_eq!(store.read("a").await.unwrap(), None);
}

#[tokio::test]
async fn json_state_helpers() {
    let store = MemoryStore::new();
    let snapshot = Snapshot {
        section: 3,
        note: "guardian".to_string(),
    };
    save_state(&store, "snap", &snapshot).await.unwrap();
    let loaded: Option<Snapshot> = load_state(&store, "snap").await.unwrap();
    assert_eq!(loaded, Some(snapshot));

    let missing: Option<Snapshot> = load_state(&store, "nothing").await.unwrap();
    assert!(missing.is_none());

    store.write("garbage", b"{not json".to_vec()).await.unwrap();
    let broken: Result<Option<Snapshot>, _> = load_state(&store, "garbage").await;
    assert!(matches!(broken, Err(StorageError::Serialization(_))));
}
