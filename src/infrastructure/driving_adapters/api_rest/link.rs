//! Link Header
//!
//! RFC 5988 style `next`/`prev` navigation for paginated list responses.

use crate::domain::models::pagination::Pagination;

/// Build the `Link` header value for a page.
///
/// Emits `next` when `page < total_pages` and `prev` when `page > 1`, in that
/// order. The tag is form-urlencoded. Returns an empty string when there is
/// nowhere to navigate.
#[must_use]
pub fn build_link_header(base: &str, pagination: &Pagination, tag: Option<&str>) -> String {
    let tag_param: String = tag
        .map(|tag| format!("&tag={}", form_urlencoded::byte_serialize(tag.as_bytes()).collect::<String>()))
        .unwrap_or_default();

    let link = |page: i64, rel: &str| {
        format!(
            "<{base}?page={page}&page_size={}{tag_param}>; rel=\"{rel}\"",
            pagination.page_size
        )
    };

    let mut links = Vec::with_capacity(2);
    if pagination.has_next() {
        links.push(link(pagination.page + 1, "next"));
    }
    if pagination.has_prev() {
        links.push(link(pagination.page - 1, "prev"));
    }
    links.join(", ")
}
