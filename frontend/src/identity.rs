use uuid::Uuid;
use web_sys::window;

use shared::validation::normalize_phone;

const FULL_NAME_KEY: &str = "full_name";
const PHONE_KEY: &str = "phone";
const DEVICE_ID_KEY: &str = "device_id";
const ADMIN_TOKEN_KEY: &str = "admin_token";

/// Narrow persistence seam so identity logic runs against an in-memory
/// store in tests.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed port. A missing storage object degrades to a no-op
/// instead of failing the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

/// What the store knows about the signed-in customer. Either field may be
/// absent; that is the normal signed-out state, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Credentials {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl Credentials {
    pub fn complete(&self) -> bool {
        self.full_name.is_some() && self.phone.is_some()
    }
}

/// Durable client-side identity, independent of any cookie or session.
pub struct IdentityStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> IdentityStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Credentials {
        Credentials {
            full_name: self.storage.get(FULL_NAME_KEY),
            phone: self.storage.get(PHONE_KEY),
        }
    }

    /// Callers validate both fields first; the phone is stored normalized so
    /// every later request and identity comparison uses the canonical form.
    pub fn save(&self, full_name: &str, phone: &str) {
        self.storage.set(FULL_NAME_KEY, full_name.trim());
        self.storage.set(PHONE_KEY, &normalize_phone(phone));
    }

    pub fn clear(&self) {
        self.storage.remove(FULL_NAME_KEY);
        self.storage.remove(PHONE_KEY);
    }

    /// Returns the persisted device identifier, lazily generating and
    /// persisting one on first use. `silent` only suppresses the diagnostic
    /// log line.
    pub fn device_id(&self, silent: bool) -> String {
        if let Some(existing) = self.storage.get(DEVICE_ID_KEY) {
            return existing;
        }
        let fresh = Uuid::new_v4().to_string();
        self.storage.set(DEVICE_ID_KEY, &fresh);
        if !silent {
            log::info!("generated new device id");
        }
        fresh
    }
}

pub fn browser_identity() -> IdentityStore<BrowserStorage> {
    IdentityStore::new(BrowserStorage)
}

// Staff bearer token, kept separate from customer identity.

pub fn get_admin_token() -> Option<String> {
    BrowserStorage.get(ADMIN_TOKEN_KEY)
}

pub fn set_admin_token(token: &str) {
    BrowserStorage.set(ADMIN_TOKEN_KEY, token);
}

pub fn clear_admin_token() {
    BrowserStorage.remove(ADMIN_TOKEN_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        map: RefCell<HashMap<String, String>>,
    }

    impl StoragePort for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.map.borrow_mut().insert(key.into(), value.into());
        }

        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }

    #[test]
    fn test_load_tolerates_missing_fields() {
        let store = IdentityStore::new(MemoryStorage::default());
        let creds = store.load();
        assert!(!creds.complete());
        assert!(creds.full_name.is_none());
    }

    #[test]
    fn test_save_persists_normalized_phone() {
        let store = IdentityStore::new(MemoryStorage::default());
        store.save("  Aysel Mammadova ", "+994 55 123 45 67");
        let creds = store.load();
        assert_eq!(creds.full_name.as_deref(), Some("Aysel Mammadova"));
        assert_eq!(creds.phone.as_deref(), Some("+994551234567"));
        assert!(creds.complete());
    }

    #[test]
    fn test_device_id_is_stable_across_calls() {
        let store = IdentityStore::new(MemoryStorage::default());
        let first = store.device_id(true);
        let second = store.device_id(false);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_clear_leaves_device_id_alone() {
        let store = IdentityStore::new(MemoryStorage::default());
        store.save("Jane Doe", "0551234567");
        let device = store.device_id(true);
        store.clear();
        assert!(!store.load().complete());
        assert_eq!(store.device_id(true), device);
    }
}
