//! Registry of open registration form instances for the web surface.
//!
//! Each rendering of the registration page gets its own [`RegistrationForm`]
//! so its loading state and notifications are private to that page. The
//! registry maps the form id embedded in the page to the live instance.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

use super::registration_form::RegistrationForm;
use crate::domain::ports::{IdentityProvider, Notifier, RegistrationBackend};
use crate::utils::form_id::generate_form_id;

struct Entry<F> {
    form: Arc<F>,
    seq: u64,
}

struct Forms<F> {
    entries: HashMap<String, Entry<F>>,
    next_seq: u64,
}

/// Bounded map from form id to form instance.
///
/// When full, the oldest form that is not currently submitting is evicted.
/// Forms in flight are never evicted.
pub struct FormRegistry<B, I, N>
where
    B: RegistrationBackend + ?Sized,
    I: IdentityProvider + ?Sized,
    N: Notifier + ?Sized,
{
    forms: Mutex<Forms<RegistrationForm<B, I, N>>>,
    capacity: usize,
}

impl<B, I, N> FormRegistry<B, I, N>
where
    B: RegistrationBackend + ?Sized,
    I: IdentityProvider + ?Sized + 'static,
    N: Notifier + ?Sized,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            forms: Mutex::new(Forms {
                entries: HashMap::new(),
                next_seq: 0,
            }),
            capacity: capacity.max(1),
        }
    }

    /// Registers a new form and returns its id.
    pub fn open(&self, form: RegistrationForm<B, I, N>) -> (String, Arc<RegistrationForm<B, I, N>>) {
        let id = generate_form_id();
        let form = Arc::new(form);

        let mut forms = self.forms.lock().unwrap_or_else(PoisonError::into_inner);
        if forms.entries.len() >= self.capacity {
            Self::evict_oldest_idle(&mut forms.entries);
        }
        let seq = forms.next_seq;
        forms.next_seq += 1;
        forms.entries.insert(
            id.clone(),
            Entry {
                form: Arc::clone(&form),
                seq,
            },
        );

        (id, form)
    }

    pub fn get(&self, id: &str) -> Option<Arc<RegistrationForm<B, I, N>>> {
        self.forms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .get(id)
            .map(|entry| Arc::clone(&entry.form))
    }

    /// Looks up `id`, opening a fresh form built by `make` if it is unknown.
    ///
    /// Unknown ids come from pages rendered before a restart or evicted forms.
    pub fn get_or_open(
        &self,
        id: &str,
        make: impl FnOnce() -> RegistrationForm<B, I, N>,
    ) -> (String, Arc<RegistrationForm<B, I, N>>) {
        match self.get(id) {
            Some(form) => (id.to_string(), form),
            None => {
                debug!(form_id = %id, "Unknown registration form, opening a new one");
                self.open(make())
            }
        }
    }

    pub fn remove(&self, id: &str) {
        self.forms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .remove(id);
    }

    pub fn len(&self) -> usize {
        self.forms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_oldest_idle(forms: &mut HashMap<String, Entry<RegistrationForm<B, I, N>>>) {
        let oldest = forms
            .iter()
            .filter(|(_, entry)| !entry.form.is_loading())
            .min_by_key(|(_, entry)| entry.seq)
            .map(|(id, _)| id.clone());

        match oldest {
            Some(id) => {
                forms.remove(&id);
            }
            None => warn!(
                open_forms = forms.len(),
                "Form registry full of in-flight submissions, growing past capacity"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockIdentityProvider, MockNotifier, MockRegistrationBackend};

    type TestRegistry = FormRegistry<MockRegistrationBackend, MockIdentityProvider, MockNotifier>;

    fn new_form() -> RegistrationForm<MockRegistrationBackend, MockIdentityProvider, MockNotifier> {
        RegistrationForm::new(
            Arc::new(MockRegistrationBackend::new()),
            Arc::new(MockIdentityProvider::new()),
            Arc::new(MockNotifier::new()),
        )
    }

    #[test]
    fn test_open_and_get_return_same_instance() {
        let registry = TestRegistry::new(10);

        let (id, form) = registry.open(new_form());
        let found = registry.get(&id).expect("form registered");

        assert!(Arc::ptr_eq(&form, &found));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = TestRegistry::new(10);
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn test_get_or_open_reuses_known_form() {
        let registry = TestRegistry::new(10);
        let (id, form) = registry.open(new_form());

        let (same_id, same_form) = registry.get_or_open(&id, new_form);

        assert_eq!(same_id, id);
        assert!(Arc::ptr_eq(&form, &same_form));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_or_open_creates_for_unknown_id() {
        let registry = TestRegistry::new(10);

        let (id, _) = registry.get_or_open("stale-id", new_form);

        assert_ne!(id, "stale-id");
        assert!(registry.get(&id).is_some());
    }

    #[test]
    fn test_remove() {
        let registry = TestRegistry::new(10);
        let (id, _) = registry.open(new_form());

        registry.remove(&id);

        assert!(registry.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let registry = TestRegistry::new(2);

        let (first, _) = registry.open(new_form());
        let (second, _) = registry.open(new_form());
        let (third, _) = registry.open(new_form());

        assert_eq!(registry.len(), 2);
        assert!(registry.get(&first).is_none());
        assert!(registry.get(&second).is_some());
        assert!(registry.get(&third).is_some());
    }
}
