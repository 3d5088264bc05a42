//! Plain path-to-content lookup for the editor site.

use std::io;
use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::AppState;

/// Content types the site serves; anything else is treated as not found.
const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("css", "text/css"),
    ("png", "image/png"),
    ("jpg", "image/jpg"),
    ("lua", "text/lua"),
];

/// The editor site on disk.
#[derive(Clone, Debug)]
pub(crate) struct StaticSite {
    root: PathBuf,
}

enum Lookup {
    File { path: PathBuf, mime: &'static str },
    Forbidden,
    NotFound,
}

impl StaticSite {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Lexically resolve a request path inside the site root.
    ///
    /// `/` maps to `index.html`. Any component that would climb out of the
    /// root is rejected rather than resolved.
    fn lookup(&self, request_path: &str) -> Lookup {
        let rel = request_path.trim_start_matches('/');
        let rel = if rel.is_empty() { "index.html" } else { rel };

        let mut path = self.root.clone();
        for component in Path::new(rel).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Lookup::Forbidden;
                }
            }
        }

        match mime_for(&path) {
            Some(mime) => Lookup::File { path, mime },
            None => Lookup::NotFound,
        }
    }

    async fn not_found(&self) -> Response {
        let body = tokio::fs::read_to_string(self.root.join("404.html"))
            .await
            .unwrap_or_else(|_| "Not Found".to_string());
        (StatusCode::NOT_FOUND, Html(body)).into_response()
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Serve the editor site: every route the API does not claim.
pub(crate) async fn serve(State(state): State<AppState>, uri: Uri) -> Response {
    let site = state.site.as_ref();
    match site.lookup(uri.path()) {
        Lookup::Forbidden => {
            tracing::warn!(
                target: "kelp.server",
                path = uri.path(),
                "rejected request escaping the site root"
            );
            (StatusCode::FORBIDDEN, Html("Forbidden".to_string())).into_response()
        }
        Lookup::NotFound => site.not_found().await,
        Lookup::File { path, mime } => match tokio::fs::read(&path).await {
            Ok(contents) => ([(header::CONTENT_TYPE, mime)], contents).into_response(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => site.not_found().await,
            Err(err) => {
                tracing::error!(
                    target: "kelp.server",
                    path = %path.display(),
                    %err,
                    "failed to read site file"
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
    }
}
