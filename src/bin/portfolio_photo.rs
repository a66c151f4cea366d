//! Replaces the profile photo on a running portfolio server.
//!
//! Usage:
//!   portfolio-photo --file me.jpg
//!   portfolio-photo --base-url http://localhost:5000 --url https://example.com/me.png

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};

use portfolio_actix::content::adapter::outgoing::PortfolioApiClient;
use portfolio_actix::content::application::ports::outgoing::PhotoFile;
use portfolio_actix::content::application::session::{
    ContentLoad, ContentSession, NoticeKind, PhotoUpdate,
};
use portfolio_actix::media::application::domain::policies::upload_policy::UploadPolicy;
use portfolio_actix::shared::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(about = "Update the portfolio profile photo")]
#[command(group(ArgGroup::new("photo").required(true).args(["file", "url"])))]
struct Args {
    /// Server root
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Local image to upload
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// http(s) URL or data URI used as-is
    #[arg(long, value_name = "PHOTO")]
    url: Option<String>,
}

fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => UploadPolicy::DEFAULT_MIME_TYPE,
    }
}

async fn read_photo_file(path: &Path) -> Result<PhotoFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("photo")
        .to_string();

    Ok(PhotoFile {
        file_name,
        mime_type: mime_type_for(path).to_string(),
        bytes,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("warn");
    let args = Args::parse();

    let client = PortfolioApiClient::new(&args.base_url)
        .with_context(|| format!("invalid base url {}", args.base_url))?;
    let mut session = ContentSession::new(client);

    if let ContentLoad::Failed(reason) = session.load().await {
        bail!("could not load portfolio content: {}", reason);
    }

    let outcome = match (&args.file, &args.url) {
        (Some(path), _) => {
            let photo = read_photo_file(path).await?;
            session.upload_photo_file(photo).await.cloned()
        }
        (None, Some(url)) => session.update_photo(url).await.cloned(),
        (None, None) => bail!("either --file or --url is required"),
    };

    if let Some(notice) = session.take_notice() {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.message),
            NoticeKind::Error => eprintln!("{}", notice.message),
        }
    }

    match outcome.context("photo update failed")? {
        PhotoUpdate::Committed => Ok(()),
        PhotoUpdate::Reverted => bail!("server rejected the new photo"),
        other => bail!("unexpected photo update state: {:?}", other),
    }
}
