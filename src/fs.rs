use std::path::Path;

use anyhow::anyhow;
use async_trait::async_trait;

#[derive(Debug, PartialEq)]
pub enum TrivialFSPathType {
    NoSuchPath,
    File,
    Directory,
}

/// The handful of filesystem operations report writing needs, so tests can
/// run against an in-memory implementation.
#[async_trait]
pub trait TrivialFS {
    async fn write(&self, p: &Path, value: &str) -> anyhow::Result<()>;
    async fn path_type(&self, p: &Path) -> anyhow::Result<TrivialFSPathType>;
}

pub struct DefaultFS {}

#[async_trait]
impl TrivialFS for DefaultFS {
    async fn write(&self, p: &Path, value: &str) -> anyhow::Result<()> {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(p).await?;
        file.write_all(value.as_bytes()).await?;
        // tokio only guarantees the bytes reached the OS once flushed.
        file.flush().await?;
        Ok(())
    }

    async fn path_type(&self, p: &Path) -> anyhow::Result<TrivialFSPathType> {
        use std::io::ErrorKind;

        let r = tokio::fs::metadata(p).await;
        match r {
            Ok(metadata) => {
                if metadata.is_file() {
                    Ok(TrivialFSPathType::File)
                } else if metadata.is_dir() {
                    Ok(TrivialFSPathType::Directory)
                } else {
                    Err(anyhow!(
                        "path_type failed: '{}' is an invalid path type",
                        p.display()
                    ))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(TrivialFSPathType::NoSuchPath),
            Err(e) => Err(anyhow!(
                "path_type failed when stating {}: {}",
                p.display(),
                e
            )),
        }
    }
}
