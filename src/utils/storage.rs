// ============================================================================
// STORAGE - Almacenamiento durable (localStorage) detrás de un trait
// ============================================================================
// La sesión se persiste aquí. Lecturas y escrituras son síncronas.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

/// Almacenamiento clave/valor de strings
pub trait DurableStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

/// localStorage del navegador.
///
/// Se usa el `web_sys::Storage` crudo de gloo para que `token` quede como
/// string plano, sin comillas JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl DurableStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("⚠️ [STORAGE] No se pudo leer '{}': {:?}", key, e);
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("Error guardando '{}': {:?}", key, e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("Error eliminando '{}': {:?}", key, e)))
    }
}

/// Storage en memoria (tests y entornos sin `window`)
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<RefCell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simula un storage lleno o bloqueado: toda escritura falla
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.borrow_mut() = read_only;
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<(), AppError> {
        if *self.read_only.borrow() {
            return Err(AppError::Storage(format!("Storage de solo lectura ('{}')", key)));
        }
        Ok(())
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.check_writable(key)?;
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.check_writable(key)?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_json<T: Serialize>(
    storage: &dyn DurableStorage,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::Storage(format!("Error serializando '{}': {}", key, e)))?;
    storage.set_item(key, &json)
}

/// `None` si la clave no existe o el contenido no es JSON válido para `T`
pub fn load_json<T: DeserializeOwned>(storage: &dyn DurableStorage, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Contenido inválido en '{}': {}", key, e);
            None
        }
    }
}
