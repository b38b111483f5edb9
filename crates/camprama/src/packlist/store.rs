//! The packlist store.
//!
//! All user lists live in one JSON document under a single key. Every
//! mutation reads the whole collection, changes one list, and writes the
//! whole collection back. Store operations never fail: malformed data
//! reads as an empty collection, missing lists come back as `None`, and
//! backend failures are logged. A mutation whose read fails writes nothing.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

use super::events::{EventBus, StoreEvent};
use super::model::{new_id, MyList, PackItem};
use crate::catalog::PacklistTemplate;
use crate::config::{PacklistConfig, DEFAULT_STORAGE_KEY};
use crate::error::Result;
use crate::storage::KeyValueStore;

const DEFAULT_EVENT_CAPACITY: usize = 64;

/// CRUD operations over the persisted list collection.
///
/// Mutations issued through one store are serialized, so concurrent
/// toggles on the same store do not lose updates. Separate stores over the
/// same backend still overwrite each other (last writer wins).
#[derive(Debug)]
pub struct PacklistStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Mutex<()>,
    events: EventBus,
}

impl PacklistStore {
    /// A store using the default key and event capacity.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY, DEFAULT_EVENT_CAPACITY)
    }

    /// A store configured from the `[packlists]` section.
    #[must_use]
    pub fn from_config(backend: Arc<dyn KeyValueStore>, config: &PacklistConfig) -> Self {
        Self::with_key(backend, &config.storage_key, config.event_capacity)
    }

    /// A store persisting under `key`.
    ///
    /// # Panics
    ///
    /// Panics if `event_capacity` is zero.
    #[must_use]
    pub fn with_key(
        backend: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        event_capacity: usize,
    ) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Mutex::new(()),
            events: EventBus::new(event_capacity),
        }
    }

    /// The key the collection is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Receive change notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// The full collection, most recently created first.
    ///
    /// Absent, empty, malformed or unreadable data yields an empty collection.
    pub async fn load_all(&self) -> Vec<MyList> {
        self.read_lists().await.unwrap_or_else(|e| {
            warn!("Failed to read packlists: {}", e);
            Vec::new()
        })
    }

    /// Point lookup by list id.
    pub async fn get_list(&self, id: &str) -> Option<MyList> {
        self.load_all().await.into_iter().find(|l| l.id == id)
    }

    /// First list whose title matches, ignoring case and surrounding whitespace.
    pub async fn find_by_title(&self, title: &str) -> Option<MyList> {
        self.load_all()
            .await
            .into_iter()
            .find(|l| l.title_matches(title))
    }

    /// Create an empty list at the front of the collection.
    ///
    /// If the collection cannot be read, the new list is returned unsaved.
    pub async fn create_list(&self, title: &str) -> MyList {
        let _guard = self.write_lock.lock().await;
        let mut list = MyList::new(title);
        let Some(mut lists) = self.read_for_write().await else {
            return list;
        };

        while lists.iter().any(|l| l.id == list.id) {
            list.id = new_id("u");
        }

        lists.insert(0, list.clone());
        self.save(&lists).await;
        debug!("Created list {} ({})", list.id, list.title);
        self.events.publish(StoreEvent::ListCreated {
            id: list.id.clone(),
        });
        list
    }

    /// Import a template, or return the list already imported from it.
    ///
    /// Items are copied with fresh ids and unchecked. If the collection
    /// cannot be read, the copy is returned unsaved.
    pub async fn copy_from_template(&self, template: &PacklistTemplate) -> MyList {
        let _guard = self.write_lock.lock().await;
        let Some(mut lists) = self.read_for_write().await else {
            return list_from_template(template);
        };

        if let Some(existing) = lists
            .iter()
            .find(|l| l.source_id.as_deref() == Some(template.id))
        {
            debug!("Template {} already imported as {}", template.id, existing.id);
            return existing.clone();
        }

        let mut list = list_from_template(template);
        while lists.iter().any(|l| l.id == list.id) {
            list.id = new_id("u");
        }

        lists.insert(0, list.clone());
        self.save(&lists).await;
        debug!("Imported template {} as {}", template.id, list.id);
        self.events.publish(StoreEvent::ListCreated {
            id: list.id.clone(),
        });
        list
    }

    /// Flip `done` on one item.
    ///
    /// `None` if the list is missing; an unknown item leaves the list unchanged.
    pub async fn toggle_item(&self, list_id: &str, item_id: &str) -> Option<MyList> {
        self.update_list(list_id, |list| {
            if let Some(item) = list.items.iter_mut().find(|it| it.id == item_id) {
                item.done = !item.done;
            }
        })
        .await
    }

    /// Insert an unchecked item at the front of the list.
    ///
    /// Blank text is ignored and the list is returned unchanged.
    pub async fn add_item(&self, list_id: &str, text: &str) -> Option<MyList> {
        if text.trim().is_empty() {
            debug!("Ignoring blank item for list {}", list_id);
            return self.get_list(list_id).await;
        }
        self.update_list(list_id, |list| list.items.insert(0, PackItem::new(text)))
            .await
    }

    /// Remove one item. Remaining items keep their order.
    pub async fn remove_item(&self, list_id: &str, item_id: &str) -> Option<MyList> {
        self.update_list(list_id, |list| list.items.retain(|it| it.id != item_id))
            .await
    }

    /// Permanently delete a list. Deleting a missing list is a no-op.
    pub async fn delete_list(&self, list_id: &str) {
        let _guard = self.write_lock.lock().await;
        let Some(mut lists) = self.read_for_write().await else {
            return;
        };
        let before = lists.len();
        lists.retain(|l| l.id != list_id);

        self.save(&lists).await;
        if lists.len() < before {
            debug!("Deleted list {}", list_id);
            self.events.publish(StoreEvent::ListDeleted {
                id: list_id.to_string(),
            });
        }
    }

    /// Wipe every saved list.
    ///
    /// Subscribers are told even when the backend removal fails.
    pub async fn clear_all(&self) {
        let _guard = self.write_lock.lock().await;
        if let Err(e) = self.backend.remove(&self.key).await {
            warn!("Failed to clear packlists: {}", e);
        }
        self.events.publish(StoreEvent::ListsCleared);
    }

    async fn update_list<F>(&self, list_id: &str, mutate: F) -> Option<MyList>
    where
        F: FnOnce(&mut MyList),
    {
        let _guard = self.write_lock.lock().await;
        let mut lists = self.read_for_write().await?;

        let Some(list) = lists.iter_mut().find(|l| l.id == list_id) else {
            debug!("List {} not found", list_id);
            return None;
        };
        mutate(list);
        let updated = list.clone();

        self.save(&lists).await;
        self.events.publish(StoreEvent::ListUpdated {
            id: updated.id.clone(),
        });
        Some(updated)
    }

    /// Absent or malformed data is an empty collection; only backend
    /// failures are errors.
    async fn read_lists(&self) -> Result<Vec<MyList>> {
        let raw = self.backend.get(&self.key).await?;
        Ok(raw.map_or_else(Vec::new, |raw| parse_lists(&raw)))
    }

    /// The collection to mutate, or `None` when it cannot be read.
    async fn read_for_write(&self) -> Option<Vec<MyList>> {
        match self.read_lists().await {
            Ok(lists) => Some(lists),
            Err(e) => {
                warn!("Failed to read packlists, skipping write: {}", e);
                None
            }
        }
    }

    async fn save(&self, lists: &[MyList]) {
        let raw = match serde_json::to_string(lists) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize packlists: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(&self.key, &raw).await {
            warn!("Failed to save packlists: {}", e);
        }
    }
}

/// An unsaved list holding unchecked copies of the template's items.
fn list_from_template(template: &PacklistTemplate) -> MyList {
    let mut list = MyList::new(template.title);
    list.items = template
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| PackItem {
            id: format!("{i}_{}", new_id("c")),
            text: item.text.to_string(),
            done: false,
        })
        .collect();
    list.source_id = Some(template.id.to_string());
    list
}

fn parse_lists(raw: &str) -> Vec<MyList> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Discarding unreadable packlists: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::catalog::find_template;
    use crate::error::{Error, Result};
    use crate::logging::init_test_logging;
    use crate::storage::{MemoryStore, SqliteStore};

    fn create_test_store() -> (Arc<MemoryStore>, PacklistStore) {
        let backend = Arc::new(MemoryStore::new());
        let store = PacklistStore::new(backend.clone());
        (backend, store)
    }

    #[derive(Debug)]
    struct FailingStore;

    /// Memory backend whose next read can be made to fail once.
    #[derive(Debug, Default)]
    struct FlakyReadStore {
        inner: MemoryStore,
        fail_read: AtomicBool,
    }

    impl FlakyReadStore {
        fn fail_next_read(&self) {
            self.fail_read.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl KeyValueStore for FlakyReadStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_read.swap(false, Ordering::SeqCst) {
                return Err(Error::internal("read failed"));
            }
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key).await
        }
    }

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::internal("read failed"))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::internal("write failed"))
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Err(Error::internal("remove failed"))
        }
    }

    #[tokio::test]
    async fn test_load_all_empty() {
        let (_, store) = create_test_store();
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_all_malformed_is_empty() {
        init_test_logging();
        let (backend, store) = create_test_store();

        for raw in ["{not json", "{\"id\":\"x\"}", "42", "", "[{\"title\":1}]"] {
            backend.set(DEFAULT_STORAGE_KEY, raw).await.unwrap();
            assert!(store.load_all().await.is_empty(), "accepted {raw:?}");
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (_, store) = create_test_store();
        let created = store.create_list("Day Hike").await;

        assert!(created.id.starts_with("u_"));
        let fetched = store.get_list(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Day Hike");
        assert!(fetched.items.is_empty());
        assert!(fetched.source_id.is_none());
    }

    #[tokio::test]
    async fn test_create_inserts_at_front() {
        let (_, store) = create_test_store();
        let first = store.create_list("First").await;
        let second = store.create_list("Second").await;

        let ids: Vec<String> = store.load_all().await.into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_get_missing_list() {
        let (_, store) = create_test_store();
        assert!(store.get_list("u_0_nope").await.is_none());
    }

    #[tokio::test]
    async fn test_day_hike_walkthrough() {
        let (_, store) = create_test_store();
        let list = store.create_list("Day Hike").await;

        let list = store.add_item(&list.id, "Map").await.unwrap();
        assert_eq!(list.items.len(), 1);
        let item = list.items[0].clone();
        assert!(item.id.starts_with("n_"));
        assert_eq!(item.text, "Map");
        assert!(!item.done);

        let list = store.toggle_item(&list.id, &item.id).await.unwrap();
        assert!(list.items[0].done);

        let list = store.remove_item(&list.id, &item.id).await.unwrap();
        assert!(list.items.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let (_, store) = create_test_store();
        let list = store.create_list("Trip").await;
        let list = store.add_item(&list.id, "Stove").await.unwrap();
        let item_id = list.items[0].id.clone();

        store.toggle_item(&list.id, &item_id).await.unwrap();
        let list = store.toggle_item(&list.id, &item_id).await.unwrap();
        assert!(!list.item(&item_id).unwrap().done);
    }

    #[tokio::test]
    async fn test_toggle_leaves_other_items() {
        let (_, store) = create_test_store();
        let list = store.create_list("Trip").await;
        store.add_item(&list.id, "Tent").await.unwrap();
        let list = store.add_item(&list.id, "Tarp").await.unwrap();

        let list = store.toggle_item(&list.id, &list.items[0].id).await.unwrap();
        assert!(list.items[0].done);
        assert!(!list.items[1].done);
    }

    #[tokio::test]
    async fn test_toggle_unknown_item_returns_list_unchanged() {
        let (_, store) = create_test_store();
        let list = store.create_list("Trip").await;
        let list = store.add_item(&list.id, "Tent").await.unwrap();

        let after = store.toggle_item(&list.id, "n_0_zzzzzz").await.unwrap();
        assert_eq!(after, list);
    }

    #[tokio::test]
    async fn test_mutations_on_missing_list_return_none() {
        let (_, store) = create_test_store();

        assert!(store.toggle_item("missing", "x").await.is_none());
        assert!(store.add_item("missing", "Map").await.is_none());
        assert!(store.remove_item("missing", "x").await.is_none());
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_item_inserts_at_front() {
        let (_, store) = create_test_store();
        let list = store.create_list("Trip").await;
        store.add_item(&list.id, "First").await.unwrap();
        let list = store.add_item(&list.id, "Second").await.unwrap();

        let texts: Vec<&str> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_add_blank_item_is_ignored() {
        let (_, store) = create_test_store();
        let list = store.create_list("Trip").await;

        let after = store.add_item(&list.id, "   ").await.unwrap();
        assert!(after.items.is_empty());
    }

    #[tokio::test]
    async fn test_add_then_remove_preserves_order() {
        let (_, store) = create_test_store();
        let list = store.create_list("Trip").await;
        store.add_item(&list.id, "A").await.unwrap();
        store.add_item(&list.id, "B").await.unwrap();
        let before = store.add_item(&list.id, "C").await.unwrap();

        let with_new = store.add_item(&list.id, "D").await.unwrap();
        let new_id = with_new.items[0].id.clone();
        let after = store.remove_item(&list.id, &new_id).await.unwrap();

        assert_eq!(after.items, before.items);
    }

    #[tokio::test]
    async fn test_remove_middle_item() {
        let (_, store) = create_test_store();
        let list = store.create_list("Trip").await;
        store.add_item(&list.id, "A").await.unwrap();
        store.add_item(&list.id, "B").await.unwrap();
        let list = store.add_item(&list.id, "C").await.unwrap();

        let after = store.remove_item(&list.id, &list.items[1].id).await.unwrap();
        let texts: Vec<&str> = after.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["C", "A"]);
    }

    #[tokio::test]
    async fn test_delete_list_is_idempotent() {
        let (_, store) = create_test_store();
        let keep = store.create_list("Keep").await;
        let gone = store.create_list("Gone").await;

        store.delete_list(&gone.id).await;
        store.delete_list(&gone.id).await;

        assert!(store.get_list(&gone.id).await.is_none());
        assert!(store.get_list(&keep.id).await.is_some());
    }

    #[tokio::test]
    async fn test_copy_from_template() {
        let (_, store) = create_test_store();
        let template = find_template("bear-country").unwrap();

        let list = store.copy_from_template(template).await;
        assert_eq!(list.title, template.title);
        assert_eq!(list.source_id.as_deref(), Some("bear-country"));
        assert_eq!(list.items.len(), template.items.len());
        for (copied, original) in list.items.iter().zip(template.items) {
            assert_eq!(copied.text, original.text);
            assert_ne!(copied.id, original.id);
            assert!(!copied.done);
        }
    }

    #[tokio::test]
    async fn test_copy_from_template_is_idempotent() {
        let (_, store) = create_test_store();
        let template = find_template("canoe-trip").unwrap();

        let first = store.copy_from_template(template).await;
        store.toggle_item(&first.id, &first.items[0].id).await.unwrap();
        let second = store.copy_from_template(template).await;

        assert_eq!(first.id, second.id);
        assert!(second.items[0].done);
        assert_eq!(store.load_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_copied_item_ids_are_unique() {
        let (_, store) = create_test_store();
        let list = store
            .copy_from_template(find_template("backcountry-hike").unwrap())
            .await;

        let mut ids: Vec<&str> = list.items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list.items.len());
    }

    #[tokio::test]
    async fn test_find_by_title() {
        let (_, store) = create_test_store();
        let list = store.create_list("Canoe Trip").await;

        assert_eq!(store.find_by_title("  canoe trip").await.unwrap().id, list.id);
        assert!(store.find_by_title("Canoe").await.is_none());
    }

    #[tokio::test]
    async fn test_persisted_document_shape() {
        let (backend, store) = create_test_store();
        let list = store
            .copy_from_template(find_template("coastal-camping").unwrap())
            .await;

        let raw = backend.get(DEFAULT_STORAGE_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["id"], list.id.as_str());
        assert_eq!(first["sourceId"], "coastal-camping");
        assert_eq!(first["items"][0]["done"], false);
    }

    #[tokio::test]
    async fn test_reads_legacy_document() {
        let (backend, store) = create_test_store();
        let raw = r#"[{"id":"u_1700000000000_abc123","title":"Old list","items":[{"id":"n_1","text":"Map","done":true},{"id":"n_2","text":"Tent"}],"sourceId":"car-camping"}]"#;
        backend.set(DEFAULT_STORAGE_KEY, raw).await.unwrap();

        let list = store.get_list("u_1700000000000_abc123").await.unwrap();
        assert_eq!(list.done_count(), 1);
        assert_eq!(list.source_id.as_deref(), Some("car-camping"));
    }

    #[tokio::test]
    async fn test_custom_key_isolation() {
        let backend: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let a = PacklistStore::with_key(backend.clone(), "A", 8);
        let b = PacklistStore::with_key(backend.clone(), "B", 8);

        a.create_list("Only in A").await;
        assert_eq!(a.key(), "A");
        assert!(b.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_all() {
        let (backend, store) = create_test_store();
        store.create_list("One").await;
        let mut events = store.subscribe();

        store.clear_all().await;

        assert!(store.load_all().await.is_empty());
        assert!(backend.get(DEFAULT_STORAGE_KEY).await.unwrap().is_none());
        assert_eq!(events.recv().await.unwrap(), StoreEvent::ListsCleared);
    }

    #[tokio::test]
    async fn test_events_published() {
        let (_, store) = create_test_store();
        let mut events = store.subscribe();

        let list = store.create_list("Trip").await;
        store.add_item(&list.id, "Map").await.unwrap();
        store.delete_list(&list.id).await;
        store.delete_list(&list.id).await;

        assert_eq!(
            events.recv().await.unwrap(),
            StoreEvent::ListCreated { id: list.id.clone() }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            StoreEvent::ListUpdated { id: list.id.clone() }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            StoreEvent::ListDeleted { id: list.id.clone() }
        );
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_backend_failures_are_swallowed() {
        init_test_logging();
        let store = PacklistStore::new(Arc::new(FailingStore));
        let mut events = store.subscribe();

        assert!(store.load_all().await.is_empty());
        let list = store.create_list("Unsaved").await;
        assert_eq!(list.title, "Unsaved");
        assert!(store.get_list(&list.id).await.is_none());
        store.delete_list(&list.id).await;

        let copied = store
            .copy_from_template(find_template("canoe-trip").unwrap())
            .await;
        assert_eq!(copied.source_id.as_deref(), Some("canoe-trip"));
        assert!(store.add_item(&list.id, "Map").await.is_none());

        // nothing was written, so the only notice is the clear
        store.clear_all().await;
        assert_eq!(events.recv().await.unwrap(), StoreEvent::ListsCleared);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_failed_read_does_not_overwrite_lists() {
        init_test_logging();
        let backend = Arc::new(FlakyReadStore::default());
        let store = PacklistStore::new(backend.clone());

        let a = store.create_list("A").await;
        store.create_list("B").await;
        store.create_list("C").await;
        let before = store.load_all().await;

        backend.fail_next_read();
        let unsaved = store.create_list("D").await;
        assert_eq!(unsaved.title, "D");

        backend.fail_next_read();
        assert!(store.add_item(&a.id, "Map").await.is_none());

        backend.fail_next_read();
        store.delete_list(&a.id).await;

        backend.fail_next_read();
        store
            .copy_from_template(find_template("bear-country").unwrap())
            .await;

        assert_eq!(store.load_all().await, before);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let (_, store) = create_test_store();
        let store = Arc::new(store);
        let list = store.create_list("Busy").await;

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            let id = list.id.clone();
            handles.push(tokio::spawn(async move {
                store.add_item(&id, &format!("item {i}")).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.get_list(&list.id).await.unwrap().items.len(), 20);
    }

    #[tokio::test]
    async fn test_survives_reopen_with_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lists.db");

        let list_id = {
            let store = PacklistStore::new(Arc::new(SqliteStore::open(&path).unwrap()));
            let list = store.create_list("Durable").await;
            store.add_item(&list.id, "Headlamp").await.unwrap();
            list.id
        };

        let store = PacklistStore::new(Arc::new(SqliteStore::open(&path).unwrap()));
        let list = store.get_list(&list_id).await.unwrap();
        assert_eq!(list.items[0].text, "Headlamp");
    }
}
