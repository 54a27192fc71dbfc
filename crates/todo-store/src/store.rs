//! Todo Store
//!
//! Owns the ordered todo collection and writes it through to storage after
//! every mutation. Collection order is significant: lanes render their todos
//! in collection order, and the last todo is the most recently created (or
//! moved) one.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::{Lane, TodoField, TodoId, TodoItem};
use crate::storage::KeyValueStorage;

/// Ids are drawn uniformly from `0..ID_RANGE`
const ID_RANGE: TodoId = 1_000_000;

/// Authoritative todo collection with write-through persistence
pub struct TodoStore<S, R = StdRng> {
    storage: S,
    rng: R,
    config: StoreConfig,
    todos: Vec<TodoItem>,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Load the collection persisted under `config.storage_key`
    pub fn open(storage: S, config: StoreConfig) -> StoreResult<Self> {
        Self::open_with_rng(storage, config, StdRng::from_entropy())
    }

    /// Start with an empty collection, ignoring whatever is stored.
    /// The stored value is replaced on the first mutation.
    pub fn empty(storage: S, config: StoreConfig) -> Self {
        Self {
            storage,
            rng: StdRng::from_entropy(),
            config,
            todos: Vec::new(),
        }
    }
}

impl<S: KeyValueStorage, R: Rng> TodoStore<S, R> {
    /// Load the collection with an explicit id generator
    pub fn open_with_rng(storage: S, config: StoreConfig, rng: R) -> StoreResult<Self> {
        let todos = load(&storage, &config.storage_key)?;
        info!("[STORE] Loaded {} todos from '{}'", todos.len(), config.storage_key);
        Ok(Self {
            storage,
            rng,
            config,
            todos,
        })
    }

    /// Append a blank todo to `lane` and return it
    pub fn create(&mut self, lane: Lane) -> StoreResult<TodoItem> {
        let item = TodoItem::new(self.next_id(), lane);
        debug!("[STORE] Create {} in {}", item.id, lane.as_str());
        let mut next = self.todos.clone();
        next.push(item.clone());
        self.commit(next)?;
        Ok(item)
    }

    /// Assign one field of a todo.
    ///
    /// Changing the lane moves the todo to the end of the collection so that
    /// it renders last in its new lane. An unknown id leaves the collection
    /// untouched but still rewrites storage.
    pub fn edit(&mut self, id: TodoId, field: TodoField) -> StoreResult<()> {
        let mut next = self.todos.clone();
        match self.position(id) {
            Some(index) => match field {
                TodoField::Content(content) => {
                    debug!("[STORE] Edit content of {}", id);
                    next[index].content = content;
                }
                TodoField::Lane(lane) => {
                    debug!("[STORE] Move {} to {}", id, lane.as_str());
                    let mut item = next.remove(index);
                    item.lane = lane;
                    next.push(item);
                }
            },
            None => warn!("[STORE] Edit of unknown todo {}", id),
        }
        self.commit(next)
    }

    pub fn set_content(&mut self, id: TodoId, content: impl Into<String>) -> StoreResult<()> {
        self.edit(id, TodoField::Content(content.into()))
    }

    pub fn move_to(&mut self, id: TodoId, lane: Lane) -> StoreResult<()> {
        self.edit(id, TodoField::Lane(lane))
    }

    /// Remove a todo; absent ids are ignored
    pub fn delete(&mut self, id: TodoId) -> StoreResult<()> {
        let mut next = self.todos.clone();
        next.retain(|item| item.id != id);
        if next.len() == self.todos.len() {
            warn!("[STORE] Delete of unknown todo {}", id);
        } else {
            debug!("[STORE] Delete {}", id);
        }
        self.commit(next)
    }

    /// Whether `id` is the last todo of the whole collection, i.e. the one
    /// that should grab keyboard focus after being created
    pub fn is_last_created(&self, id: TodoId) -> bool {
        self.todos.last().is_some_and(|item| item.id == id)
    }

    /// Snapshot of the full collection, in order
    pub fn load_all(&self) -> Vec<TodoItem> {
        self.todos.clone()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Todos of one lane, preserving collection order
    pub fn in_lane(&self, lane: Lane) -> Vec<TodoItem> {
        self.todos
            .iter()
            .filter(|item| item.lane == lane)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|item| item.id == id)
    }

    /// Draw ids until one is not already taken
    fn next_id(&mut self) -> TodoId {
        loop {
            let id = self.rng.gen_range(0..ID_RANGE);
            if self.position(id).is_none() {
                return id;
            }
        }
    }

    /// Write `next` to storage, then adopt it. A failed write leaves the
    /// in-memory collection as it was.
    fn commit(&mut self, next: Vec<TodoItem>) -> StoreResult<()> {
        let json = serde_json::to_string(&next)?;
        self.storage.set(&self.config.storage_key, &json)?;
        self.todos = next;
        Ok(())
    }
}

/// Read the stored collection. A missing key or a JSON `null` is an empty list.
fn load<S: KeyValueStorage>(storage: &S, key: &str) -> StoreResult<Vec<TodoItem>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };
    let parsed: Option<Vec<TodoItem>> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
    Ok(parsed.unwrap_or_default())
}
