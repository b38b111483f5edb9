//! User packing lists.
//!
//! [`PacklistStore`] owns the persisted collection, [`TemplateEditor`]
//! syncs a template selection into it, and [`StoreEvent`]s tell
//! subscribers when anything changed.

mod debounce;
mod editor;
mod events;
mod model;
mod store;

pub use debounce::Debouncer;
pub use editor::{SelectionItem, SyncPlan, TemplateEditor, TemplateSelection};
pub use events::StoreEvent;
pub use model::{new_id, MyList, PackItem};
pub use store::PacklistStore;
