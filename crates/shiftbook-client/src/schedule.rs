//! Schedule collection calls.

use reqwest::Method;
use shiftbook_core::constants::SCHEDULE_ROUTE;
use shiftbook_core::model::Shift;

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// ## Summary
    /// Fetches the full shift collection.
    ///
    /// ## Errors
    /// Returns an error on transport failure, rejection, or a malformed body.
    pub async fn shifts(&self) -> ClientResult<Vec<Shift>> {
        self.get_json(SCHEDULE_ROUTE).await
    }

    /// ## Summary
    /// Persists a shift. Create-vs-update is signalled by id presence alone:
    /// a shift without an id is POSTed, one with an id is PUT under it.
    ///
    /// ## Errors
    /// Returns an error on transport failure or rejection.
    pub async fn save_shift(&self, shift: &Shift) -> ClientResult<()> {
        match shift.id {
            Some(id) => {
                self.send_json_status(Method::PUT, &format!("{SCHEDULE_ROUTE}/{id}"), shift)
                    .await
            }
            None => self.send_json_status(Method::POST, SCHEDULE_ROUTE, shift).await,
        }
    }

    /// ## Summary
    /// Deletes a shift by id.
    ///
    /// ## Errors
    /// Returns an error on transport failure or rejection.
    pub async fn delete_shift(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("{SCHEDULE_ROUTE}/{id}")).await
    }
}
