use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::config_manager::system::SystemConfig;
use super::interface::SpeechArtifact;

/// Persists synthesized audio under the served output directory.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so readers of the shared file always see one complete synthesis.
#[derive(Debug, Clone)]
pub struct AudioStore {
    output_dir: PathBuf,
    file_name: String,
    url_prefix: String,
    unique_files: bool,
}

impl AudioStore {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        file_name: impl Into<String>,
        url_prefix: impl Into<String>,
        unique_files: bool,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
            url_prefix: url_prefix.into(),
            unique_files,
        }
    }

    pub fn from_config(system_config: &SystemConfig) -> Self {
        Self::new(
            system_config.audio_output_path(),
            system_config.audio_file_name.clone(),
            system_config.audio_url_prefix.clone(),
            system_config.unique_audio_files,
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `audio` and return where it can be fetched from
    pub async fn persist(&self, audio: &[u8]) -> io::Result<SpeechArtifact> {
        fs::create_dir_all(&self.output_dir).await?;

        let file_name = if self.unique_files {
            format!("{}.mp3", Uuid::new_v4())
        } else {
            self.file_name.clone()
        };
        let path = self.output_dir.join(&file_name);
        let tmp_path = self
            .output_dir
            .join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        if let Err(e) = fs::write(&tmp_path, audio).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e);
        }

        debug!("Wrote {} bytes of audio to {}", audio.len(), path.display());
        Ok(SpeechArtifact {
            url: self.url_for(&file_name),
            path,
        })
    }

    fn url_for(&self, file_name: &str) -> String {
        let prefix = self.url_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("/{}", file_name)
        } else {
            format!("/{}/{}", prefix, file_name)
        }
    }
}
