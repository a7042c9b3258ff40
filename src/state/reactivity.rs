// ============================================================================
// REACTIVITY - Lista de subscribers con desuscripción al hacer drop
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;
type Slots<T> = RefCell<Vec<(u64, Callback<T>)>>;

/// Subscribers compartidos entre todos los clones del dueño
pub struct Subscribers<T> {
    slots: Rc<Slots<T>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: 'static> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Registra un callback; se mantiene vivo mientras viva la `Subscription`
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.slots.borrow_mut().push((id, Rc::new(callback)));

        let slots: Weak<Slots<T>> = Rc::downgrade(&self.slots);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(slots) = slots.upgrade() {
                    slots.borrow_mut().retain(|(slot_id, _)| *slot_id != id);
                }
            })),
        }
    }

    /// Notifica a todos. Los callbacks pueden suscribir/desuscribir sin pánico:
    /// se itera sobre una copia de la lista.
    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .slots
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl<T: 'static> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subscribers<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

/// Guard de suscripción: al hacer drop se quita el callback
#[must_use = "la suscripción se cancela al descartar el guard"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
