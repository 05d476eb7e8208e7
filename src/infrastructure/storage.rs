// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

const PARTIAL_SUFFIX: &str = "part";

/// 本地文件系统存储实现
///
/// 先写入 `<name>.part`，刷新后再重命名为目标文件，
/// 中断时不会留下被截断的目标文件。
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// 创建存储并确保目录存在（递归创建）
    pub async fn open(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let storage = Self::new(base_path);
        storage.ensure_root().await?;
        let shown = fs::canonicalize(&storage.base_path)
            .await
            .unwrap_or_else(|_| storage.base_path.clone());
        info!("Document storage: {}", shown.display());
        Ok(storage)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    async fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    fn get_full_path(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        let candidate = Path::new(file_name);
        // Keys are bare file names; anything with a directory component is rejected
        if candidate.components().count() != 1 || candidate.file_name().is_none() {
            return Err(StorageError::Other(format!(
                "Invalid file name: {}",
                file_name
            )));
        }
        Ok(self.base_path.join(candidate))
    }
}

#[async_trait]
impl StorageRepository for LocalStorage {
    async fn save(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        let full_path = self.get_full_path(file_name)?;
        self.ensure_root().await?;

        let partial_path = full_path.with_file_name(format!("{}.{}", file_name, PARTIAL_SUFFIX));
        let mut file = fs::File::create(&partial_path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        if let Err(e) = fs::rename(&partial_path, &full_path).await {
            let _ = fs::remove_file(&partial_path).await;
            return Err(StorageError::Io(e));
        }

        debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_nested_directory() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("new_subdir").join("deeper");
        assert!(!nested.exists());

        let storage = LocalStorage::open(&nested).await.unwrap();

        assert!(nested.exists());
        assert_eq!(storage.base_path(), nested.as_path());
    }

    #[tokio::test]
    async fn test_save_writes_bytes_verbatim_without_partial_leftover() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(temp.path()).await.unwrap();
        let data = b"%PDF-1.4 binary \x00\xff payload";

        let path = storage.save("doc.pdf", data).await.unwrap();

        assert_eq!(path, temp.path().join("doc.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), data);
        assert!(!temp.path().join("doc.pdf.part").exists());
    }

    #[tokio::test]
    async fn test_save_recreates_removed_directory() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("docs");
        let storage = LocalStorage::open(&root).await.unwrap();
        std::fs::remove_dir_all(&root).unwrap();

        let path = storage.save("late.pdf", b"x").await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let temp = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(temp.path()).await.unwrap();

        assert!(storage.save("../escape.pdf", b"x").await.is_err());
        assert!(storage.save("a/b.pdf", b"x").await.is_err());
    }
}
