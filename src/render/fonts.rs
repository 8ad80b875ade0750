use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::foundation::error::{CaravelError, CaravelResult};

/// Where the shared font buffer comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSource {
    /// Fetch font bytes over HTTP once per process.
    Remote {
        /// Font file URL (ttf/otf).
        url: String,
    },
    /// Read font bytes from a local file.
    File {
        /// Font file path.
        path: PathBuf,
    },
    /// Use fonts already installed on the host.
    #[default]
    System,
}

static FONT_DB: OnceCell<Arc<usvg::fontdb::Database>> = OnceCell::const_new();

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Load the process-wide font database, fetching at most once.
///
/// The first successful load wins for the lifetime of the process; later
/// calls (including concurrent jobs) reuse the cached database. Failure here
/// is fatal to the calling job: no slide can render without a font.
pub async fn load_cached(source: &FontSource) -> CaravelResult<Arc<usvg::fontdb::Database>> {
    FONT_DB
        .get_or_try_init(|| async {
            let db = build_database(source).await?;
            Ok::<_, CaravelError>(Arc::new(db))
        })
        .await
        .cloned()
}

async fn build_database(source: &FontSource) -> CaravelResult<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    // System fonts back up whatever family the configured source provides.
    db.load_system_fonts();

    match source {
        FontSource::Remote { url } => {
            let bytes = fetch_remote(url).await?;
            debug!(url, bytes = bytes.len(), "loaded remote font");
            db.load_font_data(bytes);
        }
        FontSource::File { path } => {
            db.load_font_file(path).map_err(|e| {
                CaravelError::font(format!("read font file '{}': {e}", path.display()))
            })?;
            debug!(path = %path.display(), "loaded font file");
        }
        FontSource::System => {}
    }
    ensure_has_faces(&db)?;

    Ok(db)
}

/// A database with no faces would rasterize every `<text>` element to
/// nothing, so slides would "complete" with all copy silently dropped.
fn ensure_has_faces(db: &usvg::fontdb::Database) -> CaravelResult<()> {
    if db.is_empty() {
        return Err(CaravelError::font(
            "no fonts available: configure a font url or path, or install system fonts",
        ));
    }
    Ok(())
}

async fn fetch_remote(url: &str) -> CaravelResult<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| CaravelError::font(format!("font http client: {e}")))?;

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| CaravelError::font(format!("fetch font '{url}': {e}")))?;

    if !resp.status().is_success() {
        warn!(url, status = %resp.status(), "font fetch returned non-success");
        return Err(CaravelError::font(format!(
            "fetch font '{url}': status {}",
            resp.status()
        )));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| CaravelError::font(format!("read font body '{url}': {e}")))?;
    if bytes.is_empty() {
        return Err(CaravelError::font(format!("font '{url}' returned no bytes")));
    }
    Ok(bytes.to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
