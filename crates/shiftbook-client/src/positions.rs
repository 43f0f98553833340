//! Position collection calls.

use reqwest::Method;
use shiftbook_core::constants::POSITION_ROUTE;
use shiftbook_core::model::{NewPosition, Position};

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// ## Summary
    /// Fetches the full position collection.
    ///
    /// ## Errors
    /// Returns an error on transport failure, rejection, or a malformed body.
    pub async fn positions(&self) -> ClientResult<Vec<Position>> {
        self.get_json(POSITION_ROUTE).await
    }

    /// ## Summary
    /// Creates a position. The caller refetches the collection afterwards;
    /// the response body is not relied on.
    ///
    /// ## Errors
    /// Returns an error on transport failure or rejection.
    pub async fn create_position(&self, position: &NewPosition<'_>) -> ClientResult<()> {
        self.send_json_status(Method::POST, POSITION_ROUTE, position)
            .await
    }
}
