//! Employee directory commands.

use shiftbook_client::client::ApiClient;
use shiftbook_client::employees::EMPLOYEE_ID_PLACEHOLDER;
use shiftbook_core::model::{Employee, NewEmployee};

use crate::cli::EmployeeCommand;
use crate::error::{AppError, AppResult};
use crate::render;

pub async fn dispatch(client: &ApiClient, command: EmployeeCommand) -> AppResult<()> {
    match command {
        EmployeeCommand::List => list(client).await,
        EmployeeCommand::Add {
            first_name,
            middle_name,
            last_name,
            position,
            email,
        } => add(client, &first_name, middle_name.as_deref(), &last_name, position.as_deref(), &email).await,
        EmployeeCommand::Update {
            id,
            first_name,
            middle_name,
            last_name,
            position,
            email,
        } => update(client, &id, first_name, middle_name, last_name, position, email).await,
        EmployeeCommand::Rm { id } => remove(client, &id).await,
    }
}

async fn list(client: &ApiClient) -> AppResult<()> {
    // a failed fetch renders an empty listing with a banner, it does not
    // abort the command
    let employees = match client.employees().await {
        Ok(employees) => employees,
        Err(error) => {
            tracing::error!(error = %error, "Failed to load employees");
            render::error_banner("Failed to load employees. Please try again later.");
            Vec::new()
        }
    };
    render::employee_table(&employees);
    Ok(())
}

async fn add(
    client: &ApiClient,
    first_name: &str,
    middle_name: Option<&str>,
    last_name: &str,
    position: Option<&str>,
    email: &str,
) -> AppResult<()> {
    let employee = NewEmployee {
        employee_id: EMPLOYEE_ID_PLACEHOLDER,
        first_name,
        middle_name,
        last_name,
        position,
        email,
        status: true,
    };
    let created = client.create_employee(&employee).await?;
    println!("Created employee {} ({})", created.display_name(), created.employee_id);
    Ok(())
}

async fn update(
    client: &ApiClient,
    id: &str,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    position: Option<String>,
    email: Option<String>,
) -> AppResult<()> {
    let employees = client.employees().await?;
    let existing = employees
        .into_iter()
        .find(|employee| employee.employee_id == id)
        .ok_or_else(|| AppError::NotFound(format!("employee {id}")))?;

    let updated = Employee {
        employee_id: existing.employee_id,
        first_name: first_name.unwrap_or(existing.first_name),
        middle_name: middle_name.or(existing.middle_name),
        last_name: last_name.unwrap_or(existing.last_name),
        position: position.or(existing.position),
        email: email.unwrap_or(existing.email),
        status: existing.status,
    };
    client.update_employee(&updated).await?;
    println!("Updated employee {id}");
    Ok(())
}

async fn remove(client: &ApiClient, id: &str) -> AppResult<()> {
    client.delete_employee(id).await?;
    println!("Deleted employee {id}");
    Ok(())
}
