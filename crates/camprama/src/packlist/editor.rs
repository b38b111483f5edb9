//! Ticking items off a template into a user list.
//!
//! A [`TemplateSelection`] is the in-memory view: the template's items, any
//! custom items, and which of them are checked. A [`TemplateEditor`] wraps a
//! selection and keeps a same-titled user list in step with it, writing
//! through a [`Debouncer`] so a burst of toggles costs one sync.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use super::debounce::Debouncer;
use super::model::MyList;
use super::store::PacklistStore;
use crate::catalog::PacklistTemplate;

/// A row shown in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    /// Template item id, `myl-<id>` for items found only in the saved list,
    /// or `custom-<n>` for items added in this session.
    pub id: String,
    /// Display label.
    pub text: String,
}

/// What a sync has to change in the stored list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Ids of stored items no longer selected.
    pub to_remove: Vec<String>,
    /// Selected texts not yet stored.
    pub to_add: Vec<String>,
}

impl SyncPlan {
    /// Whether the stored list already matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty() && self.to_add.is_empty()
    }
}

/// Checked state over a template plus custom items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSelection {
    title: String,
    items: Vec<SelectionItem>,
    checked: HashSet<String>,
    next_custom: u64,
}

impl TemplateSelection {
    /// All template items, none checked.
    #[must_use]
    pub fn from_template(template: &PacklistTemplate) -> Self {
        Self {
            title: template.title.to_string(),
            items: template
                .items
                .iter()
                .map(|it| SelectionItem {
                    id: it.id.to_string(),
                    text: it.text.to_string(),
                })
                .collect(),
            checked: HashSet::new(),
            next_custom: 1,
        }
    }

    /// Title of the template, and of the list it syncs to.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rows in display order.
    #[must_use]
    pub fn items(&self) -> &[SelectionItem] {
        &self.items
    }

    /// Whether the row is checked.
    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Number of checked rows.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Reflect a previously saved list.
    ///
    /// Rows whose text is in the list become checked. Saved items that match
    /// no row are appended as checked `myl-` rows.
    pub fn merge_saved(&mut self, list: &MyList) {
        let saved: HashSet<&str> = list
            .items
            .iter()
            .map(|it| it.text.trim())
            .filter(|t| !t.is_empty())
            .collect();

        for item in &self.items {
            if saved.contains(item.text.trim()) {
                self.checked.insert(item.id.clone());
            }
        }

        let known: HashSet<String> = self
            .items
            .iter()
            .map(|it| it.text.trim().to_string())
            .collect();
        for saved_item in &list.items {
            if known.contains(saved_item.text.trim()) {
                continue;
            }
            let id = format!("myl-{}", saved_item.id);
            self.checked.insert(id.clone());
            self.items.push(SelectionItem {
                id,
                text: saved_item.text.clone(),
            });
        }
    }

    /// Flip a row. Returns `false` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|it| it.id == id) {
            return false;
        }
        if !self.checked.remove(id) {
            self.checked.insert(id.to_string());
        }
        true
    }

    /// Drop a row from this view. Returns `false` for an unknown id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|it| it.id != id);
        self.checked.remove(id);
        self.items.len() < before
    }

    /// Append a checked custom row and return its id. Blank text is ignored.
    pub fn add_custom(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = format!("custom-{}", self.next_custom);
        self.next_custom += 1;
        self.checked.insert(id.clone());
        self.items.push(SelectionItem {
            id: id.clone(),
            text: text.to_string(),
        });
        Some(id)
    }

    /// Trimmed texts of checked rows, in display order, without duplicates.
    #[must_use]
    pub fn target_texts(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|it| self.checked.contains(&it.id))
            .map(|it| it.text.trim())
            .filter(|t| !t.is_empty() && seen.insert(*t))
            .map(str::to_string)
            .collect()
    }

    /// Changes needed to make `list` hold exactly the target texts.
    #[must_use]
    pub fn plan(&self, list: &MyList) -> SyncPlan {
        let target = self.target_texts();
        let stored: HashSet<&str> = list.items.iter().map(|it| it.text.trim()).collect();

        SyncPlan {
            to_remove: list
                .items
                .iter()
                .filter(|it| !target.iter().any(|t| t == it.text.trim()))
                .map(|it| it.id.clone())
                .collect(),
            to_add: target
                .into_iter()
                .filter(|t| !stored.contains(t.as_str()))
                .collect(),
        }
    }

    /// Text for a share sheet.
    #[must_use]
    pub fn share_message(&self) -> String {
        format!("{} — {} items", self.title, self.items.len())
    }
}

#[derive(Debug)]
struct EditorState {
    store: Arc<PacklistStore>,
    title: String,
    selection: Mutex<TemplateSelection>,
    list_id: Mutex<Option<String>>,
}

impl EditorState {
    /// The backing list: cached id, then a title match, then a new list.
    ///
    /// Holds the id lock throughout, so concurrent callers create at most
    /// one list.
    async fn ensure_list(&self) -> MyList {
        let mut cached = self.list_id.lock().await;
        if let Some(id) = cached.as_deref() {
            if let Some(list) = self.store.get_list(id).await {
                return list;
            }
            debug!("Backing list {} is gone", id);
        }

        let list = match self.store.find_by_title(&self.title).await {
            Some(list) => list,
            None => self.store.create_list(&self.title).await,
        };
        *cached = Some(list.id.clone());
        list
    }

    async fn persist(&self) {
        let selection = self.selection.lock().await.clone();
        if selection.target_texts().is_empty() {
            debug!("Nothing selected in {}, skipping sync", self.title);
            return;
        }

        let list = self.ensure_list().await;
        let plan = selection.plan(&list);
        if plan.is_empty() {
            return;
        }

        debug!(
            "Syncing {}: removing {}, adding {}",
            list.id,
            plan.to_remove.len(),
            plan.to_add.len()
        );
        for item_id in &plan.to_remove {
            self.store.remove_item(&list.id, item_id).await;
        }
        for text in &plan.to_add {
            self.store.add_item(&list.id, text).await;
        }
    }
}

/// A template selection kept in sync with a user list.
#[derive(Debug)]
pub struct TemplateEditor {
    state: Arc<EditorState>,
    debouncer: Debouncer,
}

impl TemplateEditor {
    /// Open a template, picking up a saved list with the same title.
    pub async fn open(
        store: Arc<PacklistStore>,
        template: &PacklistTemplate,
        window: Duration,
    ) -> Self {
        let mut selection = TemplateSelection::from_template(template);
        let existing = store.find_by_title(template.title).await;
        if let Some(list) = &existing {
            debug!("Template {} matches saved list {}", template.id, list.id);
            selection.merge_saved(list);
        }

        let state = Arc::new(EditorState {
            store,
            title: template.title.to_string(),
            selection: Mutex::new(selection),
            list_id: Mutex::new(existing.map(|l| l.id)),
        });

        let task_state = state.clone();
        let debouncer = Debouncer::spawn(window, move || {
            let state = task_state.clone();
            async move { state.persist().await }
        });

        Self { state, debouncer }
    }

    /// Current selection.
    pub async fn snapshot(&self) -> TemplateSelection {
        self.state.selection.lock().await.clone()
    }

    /// Id of the backing list, once known.
    pub async fn list_id(&self) -> Option<String> {
        self.state.list_id.lock().await.clone()
    }

    /// Flip a row and schedule a sync. Returns `false` for an unknown id.
    pub async fn toggle(&self, id: &str) -> bool {
        let changed = self.state.selection.lock().await.toggle(id);
        if changed {
            self.debouncer.schedule().await;
        }
        changed
    }

    /// Remove a row from the view and schedule a sync.
    pub async fn remove(&self, id: &str) -> bool {
        let changed = self.state.selection.lock().await.remove(id);
        if changed {
            self.debouncer.schedule().await;
        }
        changed
    }

    /// Add an item to the backing list right away, then show it as a
    /// checked custom row. Blank text is ignored.
    pub async fn add_item(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let list = self.state.ensure_list().await;
        self.state.store.add_item(&list.id, text).await;

        let id = self.state.selection.lock().await.add_custom(text);
        self.debouncer.schedule().await;
        id
    }

    /// Sync now.
    pub async fn flush(&self) {
        self.debouncer.flush().await;
    }

    /// Stop the background task, syncing a pending change first.
    pub async fn close(self) {
        self.debouncer.shutdown().await;
    }
}
