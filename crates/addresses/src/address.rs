use serde::{Deserialize, Serialize};

/// Shipping details for one checkout: no saved label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub email: String,
    pub name: String,
    /// Free-text postal address.
    pub address: String,
}

/// A labeled, reusable shipping profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub label: String,
    #[serde(flatten)]
    pub info: ShippingInfo,
}

impl SavedAddress {
    pub fn new(label: impl Into<String>, info: ShippingInfo) -> Self {
        Self {
            label: label.into(),
            info,
        }
    }

    /// Case-insensitive label comparison (Unicode lowercase).
    pub fn matches_label(&self, label: &str) -> bool {
        self.label.to_lowercase() == label.to_lowercase()
    }
}

/// Ordered collection of saved addresses.
///
/// Invariant: no two entries have labels that are equal under case-insensitive
/// comparison. Insertion order is preserved; replacing an entry by label keeps
/// its position. Both operations are synchronous and total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    entries: Vec<SavedAddress>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SavedAddress] {
        &self.entries
    }

    pub fn find(&self, label: &str) -> Option<&SavedAddress> {
        self.entries.iter().find(|a| a.matches_label(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace by label.
    ///
    /// When an entry with a case-insensitively equal label exists it is
    /// replaced in place, keeping its position; otherwise the address is
    /// appended to the end.
    pub fn upsert(&mut self, address: SavedAddress) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|a| a.matches_label(&address.label))
        {
            *existing = address;
            return;
        }
        self.entries.push(address);
    }

    /// Delete every entry whose label matches case-insensitively.
    ///
    /// Given the uniqueness invariant this removes at most one entry; absent
    /// labels are a no-op.
    pub fn remove(&mut self, label: &str) {
        self.entries.retain(|a| !a.matches_label(label));
    }
}
