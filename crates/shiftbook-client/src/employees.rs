//! Employee collection calls.

use reqwest::Method;
use shiftbook_core::constants::EMPLOYEE_ROUTE;
use shiftbook_core::model::{Employee, NewEmployee};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Placeholder the create endpoint expects in the `employeeID` body field;
/// the server assigns the real identifier.
pub const EMPLOYEE_ID_PLACEHOLDER: &str = "empID";

impl ApiClient {
    /// ## Summary
    /// Fetches the full employee collection.
    ///
    /// ## Errors
    /// Returns an error on transport failure, rejection, or a malformed body.
    pub async fn employees(&self) -> ClientResult<Vec<Employee>> {
        self.get_json(EMPLOYEE_ROUTE).await
    }

    /// ## Summary
    /// Creates an employee and returns the record the server stored, real
    /// id included.
    ///
    /// ## Errors
    /// Returns an error on transport failure, rejection, or a malformed body.
    pub async fn create_employee(&self, employee: &NewEmployee<'_>) -> ClientResult<Employee> {
        self.send_json(Method::POST, EMPLOYEE_ROUTE, employee).await
    }

    /// ## Summary
    /// Replaces an employee record under its id.
    ///
    /// ## Errors
    /// Returns an error on transport failure or rejection.
    pub async fn update_employee(&self, employee: &Employee) -> ClientResult<()> {
        let path = format!("{EMPLOYEE_ROUTE}/{}", employee.employee_id);
        self.send_json_status(Method::PUT, &path, employee).await
    }

    /// ## Summary
    /// Deletes an employee by id.
    ///
    /// ## Errors
    /// Returns an error on transport failure or rejection.
    pub async fn delete_employee(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("{EMPLOYEE_ROUTE}/{id}")).await
    }
}
