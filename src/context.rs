//! Board Context
//!
//! Shared store handle provided via Leptos Context API. Components call the
//! mutation methods here; each one writes through to storage and republishes
//! the collection so lanes re-render.

use leptos::prelude::*;
use todo_store::{KeyValueStorage, Lane, MemoryStorage, StoreConfig, StoreResult, TodoId, TodoItem, TodoStore};

use crate::web_storage::WebStorage;

type BoxedStore = TodoStore<Box<dyn KeyValueStorage>>;

/// Board-wide store and collection signal
#[derive(Clone, Copy)]
pub struct BoardContext {
    store: StoredValue<BoxedStore, LocalStorage>,
    /// Current collection, in order - read
    pub todos: ReadSignal<Vec<TodoItem>>,
    /// Current collection, in order - write
    set_todos: WriteSignal<Vec<TodoItem>>,
    debounce_ms: u64,
}

impl BoardContext {
    /// Open the persisted board, falling back to an empty one
    pub fn open(config: StoreConfig) -> Self {
        let store = open_store(config);
        let debounce_ms = store.config().debounce_ms;
        let (todos, set_todos) = signal(store.load_all());
        Self {
            store: StoredValue::new_local(store),
            todos,
            set_todos,
            debounce_ms,
        }
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// Todos of one lane in collection order
    pub fn lane(&self, lane: Lane) -> Vec<TodoItem> {
        self.todos
            .get()
            .into_iter()
            .filter(|item| item.lane == lane)
            .collect()
    }

    /// Append a blank todo to `lane`
    pub fn create(&self, lane: Lane) -> Option<TodoItem> {
        let created = self.mutate("create", |store| store.create(lane));
        log::debug!("[BOARD] New todo in {}: {:?}", lane.as_str(), created.as_ref().map(|i| i.id));
        created
    }

    pub fn set_content(&self, id: TodoId, content: String) {
        self.mutate("edit", |store| store.set_content(id, content));
    }

    pub fn move_to(&self, id: TodoId, lane: Lane) {
        self.mutate("move", |store| store.move_to(id, lane));
    }

    pub fn delete(&self, id: TodoId) {
        self.mutate("delete", |store| store.delete(id));
    }

    /// Whether `id` should take focus after creation
    pub fn is_last_created(&self, id: TodoId) -> bool {
        self.store.with_value(|store| store.is_last_created(id))
    }

    /// Run a store mutation and republish the collection. Failures are
    /// logged; a failed mutation leaves the collection as it was.
    fn mutate<T>(&self, action: &str, op: impl FnOnce(&mut BoxedStore) -> StoreResult<T>) -> Option<T> {
        let mut result = None;
        let mut snapshot = Vec::new();
        self.store.update_value(|store| {
            result = match op(store) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::error!("[BOARD] {} failed: {}", action, e);
                    None
                }
            };
            snapshot = store.load_all();
        });
        self.set_todos.set(snapshot);
        result
    }
}

fn open_store(config: StoreConfig) -> BoxedStore {
    match TodoStore::open(browser_storage(), config.clone()) {
        Ok(store) => store,
        Err(e) => {
            log::error!("[BOARD] Could not load saved todos: {}", e);
            TodoStore::empty(browser_storage(), config)
        }
    }
}

/// Local storage, or memory when the browser refuses it
fn browser_storage() -> Box<dyn KeyValueStorage> {
    match WebStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::error!("[BOARD] {}; todos will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
