use std::{collections::HashMap, path::PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::{io::AsyncWriteExt, process};

use crate::{config::Config, errors::FetchError, temp_file::TempFile};

/// One entry of the `formats` array in `yt-dlp -J` output.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamFormat {
    #[serde(default)]
    pub format_id: String,
    pub url: Option<String>,
    pub protocol: Option<String>,
    pub ext: Option<String>,
    pub acodec: Option<String>,
    pub audio_channels: Option<u32>,
    #[serde(default)]
    pub http_headers: HashMap<String, String>,
}

impl StreamFormat {
    pub fn has_audio(&self) -> bool {
        match self.audio_channels {
            Some(channels) => channels > 0,
            None => self.acodec.as_deref().is_some_and(|c| c != "none"),
        }
    }

    /// URL of the media itself, `None` for manifests of fragments.
    fn direct_url(&self) -> Option<&str> {
        match self.protocol.as_deref() {
            None | Some("http" | "https") => self.url.as_deref(),
            Some(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    #[serde(default)]
    formats: Vec<StreamFormat>,
}

pub fn parse_formats(json: &[u8]) -> Result<Vec<StreamFormat>, FetchError> {
    let info: YtDlpInfo = serde_json::from_slice(json)?;
    Ok(info.formats)
}

/// First-match policy: whatever yt-dlp lists first wins, no bitrate comparison.
/// Returns the format along with the URL its bytes are served from.
pub fn select_audio_format(
    formats: &[StreamFormat],
) -> Result<(&StreamFormat, &str), FetchError> {
    formats
        .iter()
        .filter(|f| f.has_audio())
        .find_map(|f| f.direct_url().map(|url| (f, url)))
        .ok_or(FetchError::NoAudioFormatAvailable)
}

/// Turns a video reference into a local file holding its audio.
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    async fn fetch_audio(&self, video_ref: &str) -> Result<TempFile, FetchError>;
}

pub struct YtDlpFetcher {
    ytdlp_path: String,
    download_dir: PathBuf,
    http: reqwest::Client,
}

impl YtDlpFetcher {
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            config.ytdlp_path.clone(),
            config.download_dir.clone(),
            reqwest::Client::new(),
        )
    }

    pub fn with_client(ytdlp_path: String, download_dir: PathBuf, http: reqwest::Client) -> Self {
        Self {
            ytdlp_path,
            download_dir,
            http,
        }
    }

    /// Ask yt-dlp for every format of the video. Full URLs and bare ids both work.
    pub async fn resolve_formats(&self, video_ref: &str) -> Result<Vec<StreamFormat>, FetchError> {
        let mut cmd = process::Command::new(&self.ytdlp_path);
        cmd.arg("--no-playlist")
            .args(["--socket-timeout", "5", "--retries", "3"])
            .arg("-J") // JSON output
            .arg("--")
            .arg(video_ref);

        let output = cmd.output().await.map_err(|e| FetchError::Extractor {
            command: self.ytdlp_path.clone(),
            source: e,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(FetchError::Resolve(stderr));
        }

        parse_formats(&output.stdout)
    }

    async fn download(&self, format: &StreamFormat, url: &str) -> Result<TempFile, FetchError> {
        let mut request = self.http.get(url);
        for (name, value) in &format.http_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let mut response = request.send().await?.error_for_status()?;

        let (mut file, temp) =
            TempFile::create_in(&self.download_dir).map_err(FetchError::TempFile)?;

        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await.map_err(FetchError::Write)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(FetchError::Write)?;

        log::debug!("Wrote {} bytes to {}", written, temp.path().display());
        Ok(temp)
    }
}

#[async_trait]
impl AudioFetcher for YtDlpFetcher {
    async fn fetch_audio(&self, video_ref: &str) -> Result<TempFile, FetchError> {
        let formats = self.resolve_formats(video_ref).await?;
        let (format, url) = select_audio_format(&formats)?;
        log::info!(
            "Downloading format {} ({}) of {}",
            format.format_id,
            format.ext.as_deref().unwrap_or("?"),
            video_ref
        );
        self.download(format, url).await
    }
}
