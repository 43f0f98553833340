use serde::{Deserialize, Serialize};

/// Employee record as carried on the wire.
///
/// The service denormalizes the position title onto the record; the numeric
/// position id only appears on `Position` rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "employeeID")]
    pub employee_id: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub position: Option<String>,
    pub email: String,
    #[serde(default)]
    pub status: bool,
}

impl Employee {
    /// Name as the scheduling surfaces display it ("first last").
    #[must_use]
    pub fn display_name(&self) -> String {
        crate::util::name::display_name(&self.first_name, &self.last_name)
    }
}

/// Create payload for the employee collection.
///
/// The create endpoint expects an `employeeID` field in the body even though
/// the server assigns the real identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee<'a> {
    #[serde(rename = "employeeID")]
    pub employee_id: &'a str,
    pub first_name: &'a str,
    pub middle_name: Option<&'a str>,
    pub last_name: &'a str,
    pub position: Option<&'a str>,
    pub email: &'a str,
    pub status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_record() {
        let raw = r#"{
            "employeeID": "E1",
            "firstName": "Ann",
            "middleName": null,
            "lastName": "Lee",
            "position": "Barista",
            "email": "ann.lee@example.com",
            "status": true
        }"#;
        let employee: Employee = serde_json::from_str(raw).expect("valid employee JSON");
        assert_eq!(employee.employee_id, "E1");
        assert_eq!(employee.position.as_deref(), Some("Barista"));
        assert!(employee.status);
    }

    #[test]
    fn test_deserialize_tolerates_missing_optionals() {
        let raw = r#"{
            "employeeID": "E2",
            "firstName": "Bo",
            "lastName": "Tran",
            "email": "bo@example.com"
        }"#;
        let employee: Employee = serde_json::from_str(raw).expect("valid employee JSON");
        assert_eq!(employee.middle_name, None);
        assert_eq!(employee.position, None);
        assert!(!employee.status);
    }

    #[test]
    fn test_create_payload_is_camel_case() {
        let employee = NewEmployee {
            employee_id: "empID",
            first_name: "Ann",
            middle_name: None,
            last_name: "Lee",
            position: Some("Barista"),
            email: "ann.lee@example.com",
            status: true,
        };
        let json = serde_json::to_value(&employee).expect("serializable");
        assert_eq!(json["employeeID"], "empID");
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["lastName"], "Lee");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_display_name() {
        let employee = Employee {
            employee_id: "E1".to_string(),
            first_name: "Ann".to_string(),
            middle_name: Some("Q".to_string()),
            last_name: "Lee".to_string(),
            position: None,
            email: "ann@example.com".to_string(),
            status: true,
        };
        assert_eq!(employee.display_name(), "Ann Lee");
    }
}
