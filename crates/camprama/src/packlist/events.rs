//! Change notifications published by the packlist store.

use tokio::sync::broadcast;

/// Something changed in the list collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A list was created, blank or from a template.
    ListCreated {
        /// Id of the new list.
        id: String,
    },
    /// Items of a list changed.
    ListUpdated {
        /// Id of the changed list.
        id: String,
    },
    /// A list was permanently deleted.
    ListDeleted {
        /// Id of the removed list.
        id: String,
    },
    /// All saved lists were wiped.
    ListsCleared,
}

/// Broadcast side of the store's event channel.
#[derive(Debug, Clone)]
pub(crate) struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// `capacity` must be non-zero.
    pub(crate) fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Nobody listening is fine.
    pub(crate) fn publish(&self, event: StoreEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new(4);
        bus.publish(StoreEvent::ListsCleared);
    }

    #[tokio::test]
    async fn test_every_subscriber_receives() {
        let bus = EventBus::new(4);
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.publish(StoreEvent::ListDeleted { id: "u_1".into() });

        let expected = StoreEvent::ListDeleted { id: "u_1".into() };
        assert_eq!(a.recv().await.unwrap(), expected);
        assert_eq!(b.recv().await.unwrap(), expected);
    }
}
