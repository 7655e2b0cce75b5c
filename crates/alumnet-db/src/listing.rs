//! Runs a [`ListingPlan`] and assembles the page.

use alumnet_core::pagination::{PageRequest, PageResult};
use alumnet_core::query::{BindValue, ListingPlan};
use alumnet_core::AppError;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

/// Executes the count and data statements of `plan` concurrently.
///
/// Each statement checks out its own pool connection. The page is assembled only
/// when both succeed; any failure is reported as a storage error.
pub async fn execute<T>(
    pool: &PgPool,
    plan: &ListingPlan,
    request: &PageRequest,
) -> Result<PageResult<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count_query = sqlx::query_scalar::<_, i64>(&plan.count.sql);
    for value in &plan.count.binds {
        count_query = match value {
            BindValue::Text(text) => count_query.bind(text.as_str()),
            BindValue::Int(n) => count_query.bind(*n),
        };
    }

    let mut data_query = sqlx::query_as::<_, T>(&plan.data.sql);
    for value in &plan.data.binds {
        data_query = match value {
            BindValue::Text(text) => data_query.bind(text.as_str()),
            BindValue::Int(n) => data_query.bind(*n),
        };
    }

    let (total, data) = tokio::try_join!(count_query.fetch_one(pool), data_query.fetch_all(pool))
        .map_err(|e| {
            error!(error = %e, sql = %plan.data.sql, "Listing query failed");
            AppError::database(e)
        })?;

    debug!(
        total,
        returned = data.len(),
        page = request.page,
        limit = request.limit,
        "Listing executed"
    );

    Ok(PageResult::new(data, total, request))
}
