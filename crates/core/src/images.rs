//! Image source resolution.
//!
//! The backend serves static assets from its origin, not under the `/api`
//! prefix: product photos from `/products/images/{file}` and avatars from
//! `/uploads/avatars/{file}`. Image references in the data arrive in three
//! shapes - absolute URLs, server-absolute paths, and bare stored file
//! names - and are normalized here in one place.

/// Resolves a product image reference to an absolute URL.
///
/// Absolute `http(s)` URLs pass through untouched; a server-absolute path
/// attaches to the backend origin; a bare file name resolves through the
/// product image endpoint. Blank references yield `None` so the caller can
/// fall back to a placeholder.
pub fn resolve_product_image(api_base_url: &str, raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("http") {
        return Some(raw.to_string());
    }
    let base = api_base_url.trim_end_matches('/');
    if raw.starts_with('/') {
        return Some(format!("{}{}", origin_of(base), raw));
    }
    Some(format!("{}/products/images/{}", base, raw))
}

/// Absolute URL of a stored avatar file.
pub fn avatar_url(origin: &str, stored_file: &str) -> String {
    format!("{}/uploads/avatars/{}", origin.trim_end_matches('/'), stored_file)
}

fn origin_of(base: &str) -> String {
    base.trim_end_matches("/api").to_string()
}
