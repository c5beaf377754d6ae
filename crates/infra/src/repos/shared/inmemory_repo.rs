use lecture_reminder_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Useful functions for creating inmemory repositories

// Every mutation below is a single push or assignment, so the data is
// still consistent when the lock is poisoned.
fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    collection.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Appends the value, or replaces the one with the same id in place when
/// `replace` allows it. Returns the value stored afterwards.
pub fn upsert_if<T: Clone + Entity, F: FnOnce(&T) -> bool>(
    val: &T,
    collection: &Mutex<Vec<T>>,
    replace: F,
) -> T {
    let mut collection = lock(collection);
    match collection.iter_mut().find(|item| item.id() == val.id()) {
        Some(existing) => {
            if replace(existing) {
                *existing = val.clone();
            }
            existing.clone()
        }
        None => {
            collection.push(val.clone());
            val.clone()
        }
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    lock(collection)
        .iter()
        .find(|item| item.id() == val_id)
        .cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    lock(collection)
        .iter()
        .filter(|item| compare(item))
        .cloned()
        .collect()
}

pub fn all<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    lock(collection).clone()
}

/// Applies `update` to the value with the given id while holding the lock,
/// so that a read followed by a write can not interleave with another writer.
pub fn update<T: Clone + Entity, R, U: FnOnce(&mut T) -> R>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    update: U,
) -> Option<(T, R)> {
    let mut collection = lock(collection);
    collection
        .iter_mut()
        .find(|item| item.id() == val_id)
        .map(|item| {
            let res = update(item);
            (item.clone(), res)
        })
}
