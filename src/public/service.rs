use std::{
    io,
    path::{Component, Path, PathBuf},
};

use super::{enums::content_type::ContentType, errors::PublicApiError};

pub const INDEX_DOCUMENT: &str = "index.html";

#[derive(Debug)]
pub struct PublicFile {
    pub content_type: ContentType,
    pub data: Vec<u8>,
}

/// Turns a request path into a path relative to the public root. `..` may
/// only walk back over segments the path itself added.
pub fn resolve_relative_path(request_path: &str) -> Result<PathBuf, PublicApiError> {
    if request_path == "/" {
        return Ok(PathBuf::from(INDEX_DOCUMENT));
    }

    let mut relative = PathBuf::new();

    for segment in request_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                if !relative.pop() {
                    return Err(PublicApiError::Forbidden);
                }
            }
            segment => {
                // separators or drive prefixes hidden inside one segment
                if segment.contains('\\') || segment.contains('\0') {
                    return Err(PublicApiError::Forbidden);
                }

                let mut components = Path::new(segment).components();
                match (components.next(), components.next()) {
                    (Some(Component::Normal(_)), None) => relative.push(segment),
                    _ => return Err(PublicApiError::Forbidden),
                }
            }
        }
    }

    return Ok(relative);
}

/// Resolves `request_path` under `root` and reads it. Symlinks are followed,
/// but the final target must still live under the canonical root.
pub async fn read_file(root: &Path, request_path: &str) -> Result<PublicFile, PublicApiError> {
    let relative = resolve_relative_path(request_path)?;

    let canonical_root = match tokio::fs::canonicalize(root).await {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(%e, root = %root.display(), "public root is not readable");
            return Err(PublicApiError::NotFound);
        }
    };

    let canonical_path = match tokio::fs::canonicalize(canonical_root.join(&relative)).await {
        Ok(path) => path,
        Err(e) => {
            log_read_error(&e, &relative);
            return Err(PublicApiError::NotFound);
        }
    };

    if !canonical_path.starts_with(&canonical_root) {
        tracing::warn!(path = %relative.display(), "public path escapes the root");
        return Err(PublicApiError::Forbidden);
    }

    match tokio::fs::metadata(&canonical_path).await {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => return Err(PublicApiError::NotFound),
        Err(e) => {
            log_read_error(&e, &relative);
            return Err(PublicApiError::NotFound);
        }
    }

    match tokio::fs::read(&canonical_path).await {
        Ok(data) => Ok(PublicFile {
            content_type: ContentType::from_path(&canonical_path),
            data,
        }),
        Err(e) => {
            log_read_error(&e, &relative);
            Err(PublicApiError::NotFound)
        }
    }
}

fn log_read_error(e: &io::Error, relative: &Path) {
    match e.kind() {
        io::ErrorKind::NotFound => {}
        _ => tracing::error!(%e, path = %relative.display(), "failed to read public file"),
    }
}
