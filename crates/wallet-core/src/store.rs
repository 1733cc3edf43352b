//! Persistence for wallet material.
//!
//! Records are JSON-serialized [`WalletMaterial`] keyed by
//! `wallet_<walletId>`, replaced wholesale on every write.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::WalletError;
use crate::types::WalletMaterial;

/// Storage key for a wallet id.
pub fn storage_key(wallet_id: &str) -> String {
    format!("wallet_{wallet_id}")
}

/// Repository of wallet records, injected into the operations that need one.
pub trait WalletStore {
    /// Load a wallet; `Ok(None)` when no record exists.
    fn get(&self, wallet_id: &str) -> Result<Option<WalletMaterial>, WalletError>;

    /// Store a wallet, replacing any existing record.
    fn put(&self, wallet_id: &str, material: &WalletMaterial) -> Result<(), WalletError>;

    fn contains(&self, wallet_id: &str) -> Result<bool, WalletError> {
        Ok(self.get(wallet_id)?.is_some())
    }
}

/// In-process store holding the serialized records, like browser local
/// storage does.
#[derive(Debug, Default)]
pub struct MemoryWalletStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized record under a storage key.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.records.read().ok()?.get(key).cloned()
    }

    /// Insert a raw record, bypassing serialization.
    pub fn insert_raw(&self, key: &str, value: String) -> Result<(), WalletError> {
        self.records
            .write()
            .map_err(|_| WalletError::Storage("wallet store lock poisoned".into()))?
            .insert(key.to_string(), value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WalletStore for MemoryWalletStore {
    fn get(&self, wallet_id: &str) -> Result<Option<WalletMaterial>, WalletError> {
        let records = self
            .records
            .read()
            .map_err(|_| WalletError::Storage("wallet store lock poisoned".into()))?;
        records
            .get(&storage_key(wallet_id))
            .map(|json| serde_json::from_str(json).map_err(WalletError::from))
            .transpose()
    }

    fn put(&self, wallet_id: &str, material: &WalletMaterial) -> Result<(), WalletError> {
        let json = serde_json::to_string(material)?;
        self.insert_raw(&storage_key(wallet_id), json)
    }
}

/// One `<storage key>.json` file per wallet under a base directory.
#[derive(Debug, Clone)]
pub struct FileWalletStore {
    base_path: PathBuf,
}

impl FileWalletStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_path
    }

    fn record_path(&self, wallet_id: &str) -> Result<PathBuf, WalletError> {
        if wallet_id.is_empty()
            || !wallet_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(WalletError::Storage(format!(
                "invalid wallet id '{wallet_id}'"
            )));
        }
        Ok(self
            .base_path
            .join(format!("{}.json", storage_key(wallet_id))))
    }
}

impl WalletStore for FileWalletStore {
    fn get(&self, wallet_id: &str) -> Result<Option<WalletMaterial>, WalletError> {
        let path = self.record_path(wallet_id)?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn put(&self, wallet_id: &str, material: &WalletMaterial) -> Result<(), WalletError> {
        let path = self.record_path(wallet_id)?;
        fs::create_dir_all(&self.base_path)?;

        // Write-then-rename so a record is either fully replaced or untouched.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(material)?)?;
        fs::rename(&tmp, &path)?;

        log::info!("saved wallet {wallet_id} to {}", path.display());
        Ok(())
    }
}
