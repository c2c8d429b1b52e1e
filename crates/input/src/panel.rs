use tracing::debug;

use crate::core::ContactSensor;
use crate::types::{Contacts, Finger};

/// Keyboard-held contacts
///
/// Terminals rarely report key releases, so each finger key toggles its
/// contact instead of holding it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactPanel {
    contacts: Contacts,
}

impl ContactPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, finger: Finger) {
        self.contacts.toggle(finger);
        debug!(
            finger = finger.as_str(),
            touched = self.contacts.is_touched(finger),
            "contact toggled"
        );
    }

    pub fn clear(&mut self) {
        self.contacts = Contacts::NONE;
        debug!("contacts cleared");
    }

    pub fn contacts(&self) -> Contacts {
        self.contacts
    }
}

impl ContactSensor for ContactPanel {
    fn read_contacts(&mut self) -> Contacts {
        self.contacts
    }
}
