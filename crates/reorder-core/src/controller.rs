//! Reorder Controller
//!
//! Drives move-and-commit cycles against an injected remote store.
//!
//! The optimistic part of a move runs synchronously when `move_item` is
//! called; the returned future only performs the remote commit. That future
//! keeps a weak reference to the collection, so a page torn down mid-commit
//! turns the late resolution into a no-op. Dropping that future before it
//! resolves abandons the commit and restores the previous order.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::collection::{CommitTicket, OrderedCollection, PreparedMove};
use crate::entity::Entity;
use crate::error::{MoveOutcome, ReorderError};
use crate::intent::MoveIntent;

/// Capability to persist an id sequence as the canonical order.
///
/// Implementations must be idempotent: committing the same sequence twice
/// leaves the store as committing it once.
#[async_trait(?Send)]
pub trait OrderCommitter<Id> {
    type Error: std::error::Error + 'static;

    async fn commit_order(&self, ids: Vec<Id>) -> Result<(), Self::Error>;
}

type Observer<T> = Rc<dyn Fn(&[T])>;

struct Shared<T> {
    collection: OrderedCollection<T>,
    observer: Option<Observer<T>>,
}

/// One reusable controller per ordered view, shared by every page that
/// lets users reorder items
pub struct ReorderController<T, C> {
    shared: Rc<RefCell<Shared<T>>>,
    committer: Rc<C>,
}

impl<T, C> Clone for ReorderController<T, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            committer: Rc::clone(&self.committer),
        }
    }
}

impl<T, C> ReorderController<T, C>
where
    T: Entity + 'static,
    C: OrderCommitter<T::Id> + 'static,
{
    pub fn new(committer: C) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                collection: OrderedCollection::default(),
                observer: None,
            })),
            committer: Rc::new(committer),
        }
    }

    /// Register the callback invoked after every visible change
    /// (optimistic move, rollback, reload)
    pub fn on_change(&self, observer: impl Fn(&[T]) + 'static) {
        self.shared.borrow_mut().observer = Some(Rc::new(observer));
    }

    pub fn items(&self) -> Vec<T> {
        self.shared.borrow().collection.items().to_vec()
    }

    pub fn order(&self) -> Vec<T::Id> {
        self.shared.borrow().collection.order()
    }

    pub fn is_pending(&self) -> bool {
        self.shared.borrow().collection.is_pending()
    }

    /// Whether a commit, possibly superseded by a reload, is still unresolved
    pub fn is_committing(&self) -> bool {
        self.shared.borrow().collection.is_committing()
    }

    /// Replace the collection with freshly loaded items
    pub fn replace(&self, items: Vec<T>) -> Result<(), ReorderError> {
        self.shared.borrow_mut().collection.replace(items)?;
        notify(&self.shared);
        Ok(())
    }

    /// Load the collection from `fetch`.
    ///
    /// On failure the current collection is left as it was.
    pub fn load<F, E>(&self, fetch: F) -> LocalBoxFuture<'static, Result<(), ReorderError>>
    where
        F: Future<Output = Result<Vec<T>, E>> + 'static,
        E: std::error::Error + 'static,
    {
        let weak = Rc::downgrade(&self.shared);
        async move {
            let items = match fetch.await {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to load collection");
                    return Err(ReorderError::LoadFailed { source: Box::new(err) });
                }
            };
            let Some(shared) = weak.upgrade() else {
                return Ok(());
            };

            let count = items.len();
            let replaced = shared.borrow_mut().collection.replace(items);
            if let Err(err) = replaced {
                tracing::warn!(error = %err, "refusing loaded collection");
                return Err(err);
            }
            tracing::info!(count, "collection loaded");
            notify(&shared);
            Ok(())
        }
        .boxed_local()
    }

    /// Apply `intent` optimistically, then commit the new order.
    ///
    /// The visible order has already changed when this returns. The future
    /// resolves to:
    /// - `Unchanged` for a no-op intent (no remote call is made)
    /// - `Committed(order)` once the store confirms
    /// - `Discarded` when the collection was reloaded or dropped meanwhile
    /// - `CommitInFlight` when another commit has not resolved yet
    /// - `CommitFailed` after the previous order has been restored
    pub fn move_item(
        &self,
        intent: MoveIntent<T::Id>,
    ) -> LocalBoxFuture<'static, Result<MoveOutcome<T::Id>, ReorderError>> {
        let begun = self.shared.borrow_mut().collection.begin_move(&intent);
        let PreparedMove { ticket, order } = match begun {
            Ok(Some(prepared)) => prepared,
            Ok(None) => {
                tracing::debug!(?intent, "ignoring no-op move");
                return future::ready(Ok(MoveOutcome::Unchanged)).boxed_local();
            }
            Err(err) => {
                tracing::debug!(?intent, "move rejected: {err}");
                return future::ready(Err(err)).boxed_local();
            }
        };
        notify(&self.shared);

        let mut guard = AbandonGuard {
            shared: Rc::downgrade(&self.shared),
            ticket,
            armed: true,
        };
        let committer = Rc::clone(&self.committer);
        async move {
            let result = committer.commit_order(order.clone()).await;
            guard.armed = false;

            let Some(shared) = guard.shared.upgrade() else {
                tracing::debug!("collection dropped before commit resolved");
                return Ok(MoveOutcome::Discarded);
            };

            match result {
                Ok(()) => {
                    let confirmed = shared.borrow_mut().collection.confirm(ticket);
                    if !confirmed {
                        return Ok(MoveOutcome::Discarded);
                    }
                    tracing::info!(count = order.len(), "new order committed");
                    Ok(MoveOutcome::Committed(order))
                }
                Err(err) => {
                    let rolled_back = shared.borrow_mut().collection.roll_back(ticket);
                    if !rolled_back {
                        tracing::debug!(error = %err, "stale commit failed after reload");
                        return Ok(MoveOutcome::Discarded);
                    }
                    tracing::warn!(error = %err, "commit failed, previous order restored");
                    notify(&shared);
                    Err(ReorderError::CommitFailed { source: Box::new(err) })
                }
            }
        }
        .boxed_local()
    }
}

/// Releases the commit slot when a move future is dropped unresolved
struct AbandonGuard<T: Entity> {
    shared: Weak<RefCell<Shared<T>>>,
    ticket: CommitTicket,
    armed: bool,
}

impl<T: Entity> Drop for AbandonGuard<T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let restored = match shared.try_borrow_mut() {
            Ok(mut state) => state.collection.roll_back(self.ticket),
            Err(_) => return,
        };
        if restored {
            tracing::debug!("commit abandoned, previous order restored");
            notify(&shared);
        }
    }
}

/// Hand the current items to the observer without holding the borrow
fn notify<T: Entity>(shared: &Rc<RefCell<Shared<T>>>) {
    let (observer, items) = {
        let state = shared.borrow();
        match &state.observer {
            Some(observer) => (Rc::clone(observer), state.collection.items().to_vec()),
            None => return,
        }
    };
    observer(&items);
}
