//! Multi-page fetch loop for `HhClient`.

use std::time::Duration;

use hhsal_core::ResultSet;

use crate::error::ClientError;
use crate::normalize::normalize_vacancy;
use crate::types::VacancyItem;

use super::{HhClient, MAX_PAGES};

impl HhClient {
    /// Fetches every page for `text` and normalizes all listings into a
    /// [`ResultSet`], in retrieval order.
    ///
    /// Starts at page 0 and stops once the page index reaches the page count
    /// reported by the API. `inter_page_delay_ms` is slept between successive
    /// requests (not before the first one).
    ///
    /// **All-or-nothing semantics**: any failed page discards everything
    /// fetched so far and returns the error.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`].
    /// Returns [`ClientError::PaginationLimit`] if more than [`MAX_PAGES`]
    /// pages would be requested.
    pub async fn fetch_vacancies(
        &self,
        text: &str,
        inter_page_delay_ms: u64,
    ) -> Result<ResultSet, ClientError> {
        let mut results = ResultSet::new(text);
        let mut page = 0u32;

        loop {
            if page >= MAX_PAGES {
                return Err(ClientError::PaginationLimit {
                    max_pages: MAX_PAGES,
                });
            }

            if page > 0 && inter_page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_page_delay_ms)).await;
            }

            let response = self.fetch_page(text, page).await?;
            if page == 0 {
                results.set_found(response.found);
            }

            tracing::info!(
                page,
                pages = response.pages,
                items = response.items.len(),
                "fetched vacancy page"
            );

            for value in response.items {
                results.push(normalize_vacancy(VacancyItem::from_value(value)));
            }

            page += 1;
            if page >= response.pages {
                break;
            }
        }

        tracing::info!(
            search_text = text,
            records = results.len(),
            with_salary = results.reference_salaries().len(),
            "vacancy fetch complete"
        );

        Ok(results)
    }
}
