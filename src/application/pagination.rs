//! Cursor links for paginated endpoints.
//!
//! Two independent policies:
//!
//! - **Offset** (collection listings): `prev`/`next` shift `start` by `num`.
//!   `next` stops at a fixed ceiling of [`MAX_LIST_OFFSET`] regardless of how
//!   many results came back.
//! - **Page** (reviews): `prev`/`next` shift `page` by one. `next` exists
//!   while the current page is non-empty; there is no ceiling.
//!
//! Both render links from the current request's query with only the cursor
//! parameter rewritten. Each link is computed from its own copy of the query.
//!
//! [`MAX_LIST_OFFSET`]: crate::api::dto::pagination::MAX_LIST_OFFSET

use crate::api::dto::pagination::{OffsetCursor, PageCursor};
use crate::api::dto::query::QueryParams;
use crate::api::dto::resources::ResultList;
use crate::utils::request_context::RequestContext;
use crate::utils::url_builder::build_url_with_query;

/// Attaches offset-cursor links to a collection listing.
pub fn paginate_offset<T>(
    ctx: &RequestContext,
    query: &QueryParams,
    subpath: &str,
    mut list: ResultList<T>,
) -> ResultList<T> {
    let Some(cursor) = OffsetCursor::from_query(query) else {
        tracing::debug!("non-numeric offset cursor, omitting page links");
        return list;
    };

    list.prev = cursor.prev_start().map(|start| {
        build_url_with_query(ctx, subpath, &query.with("start", start).to_query_string())
    });
    list.next = cursor.next_start().map(|start| {
        build_url_with_query(ctx, subpath, &query.with("start", start).to_query_string())
    });

    list
}

/// Attaches page-number links to a page of reviews.
pub fn paginate_page<T>(
    ctx: &RequestContext,
    query: &QueryParams,
    subpath: &str,
    mut list: ResultList<Vec<T>>,
) -> ResultList<Vec<T>> {
    let Some(cursor) = PageCursor::from_query(query) else {
        tracing::debug!("non-numeric page cursor, omitting page links");
        return list;
    };

    list.prev = cursor.prev_page().map(|page| {
        build_url_with_query(ctx, subpath, &query.with("page", page).to_query_string())
    });
    if !list.results.is_empty() {
        list.next = cursor.next_page().map(|page| {
            build_url_with_query(ctx, subpath, &query.with("page", page).to_query_string())
        });
    }

    list
}
