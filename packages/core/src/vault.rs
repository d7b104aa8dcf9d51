//! Labeled retention of generated passwords
//!
//! Opt-in only: the session controller forwards a generated password here
//! when the user asks to keep it. Entries never expire within a run and
//! there is no persistence.

/// Label-to-password map preserving insertion order.
///
/// Backed by a vector of pairs; reusing a label overwrites its password in
/// place, so the label keeps its original position in the listing. The
/// expected entry count is small enough that linear lookup is fine.
#[derive(Debug, Default)]
pub struct SecretVault {
    entries: Vec<(String, String)>,
}

impl SecretVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain `password` under `label`, overwriting any prior value.
    pub fn store(&mut self, label: &str, password: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| l == label) {
            entry.1 = password.to_string();
        } else {
            self.entries.push((label.to_string(), password.to_string()));
        }
    }

    /// All retained (label, password) pairs in insertion order.
    ///
    /// Empty when nothing has been stored; the "nothing stored yet" message
    /// is the caller's presentation concern.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_lists_in_insertion_order() {
        let mut vault = SecretVault::new();
        vault.store("bank", "one");
        vault.store("mail", "two");

        assert_eq!(
            vault.entries(),
            &[
                ("bank".to_string(), "one".to_string()),
                ("mail".to_string(), "two".to_string()),
            ]
        );
    }

    #[test]
    fn reused_label_keeps_one_entry_with_latest_value() {
        let mut vault = SecretVault::new();
        vault.store("bank", "first");
        vault.store("other", "kept");
        vault.store("bank", "second");

        let bank: Vec<_> = vault.entries().iter().filter(|(l, _)| l == "bank").collect();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].1, "second");
        // position preserved
        assert_eq!(vault.entries()[0].0, "bank");
    }

    #[test]
    fn listing_is_idempotent() {
        let mut vault = SecretVault::new();
        vault.store("a", "1");
        vault.store("b", "2");

        let first: Vec<_> = vault.entries().to_vec();
        let second: Vec<_> = vault.entries().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_vault_yields_empty_slice() {
        let vault = SecretVault::new();
        assert!(vault.is_empty());
        assert!(vault.entries().is_empty());
    }
}
