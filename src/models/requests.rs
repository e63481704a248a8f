//! Request DTOs for the employee API
//!
//! Defines the structure of incoming HTTP request bodies and their validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::registry::{normalize_email, NewEmployee, MAX_AGE, MIN_AGE};

/// Request body for creating an employee (POST /api/v1/employee)
///
/// Every field is optional at the serde level so that missing fields are
/// reported by [`validate`](Self::validate) with the field name instead of
/// a generic deserialization error. Server-derived fields (`id`, `fullName`,
/// `terminationDate`) are not part of the request and are ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub salary: Option<i64>,
    pub age: Option<i64>,
    /// Hire date; defaults to creation time when absent
    pub contract_hire_date: Option<DateTime<Utc>>,
}

impl CreateEmployeeRequest {
    /// Validates and normalizes the request against the current time `now`.
    ///
    /// Rules are checked in a fixed order and the first failure is returned:
    /// required strings, email shape, age range, salary sign, hire date.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewEmployee> {
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let email = required(self.email, "email")?;
        let job_title = required(self.job_title, "jobTitle")?;

        if !email.contains('@') {
            return Err(invalid("email must contain @"));
        }

        let age = self
            .age
            .map(|age| {
                u8::try_from(age)
                    .ok()
                    .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
                    .ok_or_else(|| {
                        invalid(format!("age must be between {} and {}", MIN_AGE, MAX_AGE))
                    })
            })
            .transpose()?;

        let salary = self
            .salary
            .map(|salary| u64::try_from(salary).map_err(|_| invalid("salary must be >= 0")))
            .transpose()?;

        if matches!(self.contract_hire_date, Some(hired) if hired > now) {
            return Err(invalid("contractHireDate cannot be in the future"));
        }

        Ok(NewEmployee {
            first_name,
            last_name,
            email: normalize_email(&email),
            job_title,
            salary,
            age,
            hire_date: self.contract_hire_date.unwrap_or(now),
        })
    }
}

/// Validates an optional payload; an absent payload is the first rule to fail.
pub fn validate_create(
    request: Option<CreateEmployeeRequest>,
    now: DateTime<Utc>,
) -> Result<NewEmployee> {
    request
        .ok_or_else(|| invalid("Request body is required"))?
        .validate(now)
}

/// True when the body carries nothing but whitespace.
pub fn is_empty_payload(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Parses a raw creation body.
///
/// An empty body or a JSON `null` yields `Ok(None)`. Only a JSON object is
/// accepted as a request; anything else is a validation error.
pub fn parse_create_payload(body: &[u8]) -> Result<Option<CreateEmployeeRequest>> {
    if is_empty_payload(body) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body).map_err(malformed)?;
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => serde_json::from_value(value).map(Some).map_err(malformed),
        _ => Err(invalid("Request body must be a JSON object")),
    }
}

fn malformed(err: serde_json::Error) -> ApiError {
    invalid(format!("Malformed request body: {}", err))
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(invalid(format!("{} is required", field))),
    }
}

fn invalid(message: impl Into<String>) -> ApiError {
    ApiError::Validation(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_request() -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            first_name: Some("  Ada ".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some(" Ada@X.com ".to_string()),
            job_title: Some("Engineer\n".to_string()),
            ..Default::default()
        }
    }

    fn validation_message(result: Result<NewEmployee>) -> String {
        match result {
            Err(ApiError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@x.com","jobTitle":"Engineer","age":36,"contractHireDate":"2020-01-02T03:04:05Z"}"#;
        let req: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.first_name.as_deref(), Some("Ada"));
        assert_eq!(req.age, Some(36));
        assert!(req.salary.is_none());
        assert!(req.contract_hire_date.is_some());
    }

    #[test]
    fn test_validate_normalizes() {
        let now = Utc::now();
        let new = valid_request().validate(now).unwrap();

        assert_eq!(new.first_name, "Ada");
        assert_eq!(new.last_name, "Lovelace");
        assert_eq!(new.email, "ada@x.com");
        assert_eq!(new.job_title, "Engineer");
        assert_eq!(new.hire_date, now);
        assert!(new.age.is_none());
        assert!(new.salary.is_none());
    }

    #[test]
    fn test_validate_missing_payload() {
        let msg = validation_message(validate_create(None, Utc::now()));
        assert_eq!(msg, "Request body is required");
    }

    #[test]
    fn test_validate_required_fields_in_order() {
        let msg = validation_message(CreateEmployeeRequest::default().validate(Utc::now()));
        assert_eq!(msg, "firstName is required");

        let mut req = valid_request();
        req.last_name = Some("   ".to_string());
        req.job_title = None;
        let msg = validation_message(req.validate(Utc::now()));
        assert_eq!(msg, "lastName is required");

        let mut req = valid_request();
        req.job_title = None;
        let msg = validation_message(req.validate(Utc::now()));
        assert_eq!(msg, "jobTitle is required");
    }

    #[test]
    fn test_validate_email_requires_at() {
        let mut req = valid_request();
        req.email = Some("ada.x.com".to_string());
        req.age = Some(500);
        let msg = validation_message(req.validate(Utc::now()));
        assert_eq!(msg, "email must contain @");
    }

    #[test]
    fn test_validate_age_bounds() {
        for bad in [0, -1, 121, 150, 1_000] {
            let mut req = valid_request();
            req.age = Some(bad);
            let msg = validation_message(req.validate(Utc::now()));
            assert!(msg.contains("age"), "age {} gave {}", bad, msg);
        }

        for good in [1, 65, 120] {
            let mut req = valid_request();
            req.age = Some(good);
            let new = req.validate(Utc::now()).unwrap();
            assert_eq!(new.age, Some(good as u8));
        }
    }

    #[test]
    fn test_validate_salary_sign() {
        let mut req = valid_request();
        req.salary = Some(-1);
        let msg = validation_message(req.validate(Utc::now()));
        assert_eq!(msg, "salary must be >= 0");

        let mut req = valid_request();
        req.salary = Some(0);
        assert_eq!(req.validate(Utc::now()).unwrap().salary, Some(0));
    }

    #[test]
    fn test_validate_hire_date() {
        let now = Utc::now();

        let mut req = valid_request();
        req.contract_hire_date = Some(now + Duration::days(1));
        let msg = validation_message(req.validate(now));
        assert_eq!(msg, "contractHireDate cannot be in the future");

        // Exactly now is not "after" now
        let mut req = valid_request();
        req.contract_hire_date = Some(now);
        assert_eq!(req.validate(now).unwrap().hire_date, now);

        let past = now - Duration::days(365);
        let mut req = valid_request();
        req.contract_hire_date = Some(past);
        assert_eq!(req.validate(now).unwrap().hire_date, past);
    }

    #[test]
    fn test_validate_age_checked_before_salary() {
        let mut req = valid_request();
        req.age = Some(0);
        req.salary = Some(-1);
        let msg = validation_message(req.validate(Utc::now()));
        assert_eq!(msg, "age must be between 1 and 120");
    }

    #[test]
    fn test_validate_salary_checked_before_hire_date() {
        let now = Utc::now();
        let mut req = valid_request();
        req.salary = Some(-1);
        req.contract_hire_date = Some(now + Duration::days(1));
        let msg = validation_message(req.validate(now));
        assert_eq!(msg, "salary must be >= 0");
    }

    #[test]
    fn test_parse_rejects_non_object_json() {
        let bodies: [&[u8]; 4] = [
            b"[]",
            br#"["Ada","Lovelace","ada@x.com","Engineer",null,null,null]"#,
            b"42",
            br#""ada@x.com""#,
        ];
        for body in bodies {
            let result = parse_create_payload(body);
            assert!(
                matches!(result, Err(ApiError::Validation(ref msg)) if msg == "Request body must be a JSON object"),
                "body {:?} gave {:?}",
                String::from_utf8_lossy(body),
                result
            );
        }
    }

    #[test]
    fn test_empty_payload_detection() {
        assert!(is_empty_payload(b""));
        assert!(is_empty_payload(b" \r\n\t"));
        assert!(!is_empty_payload(b"{}"));
    }

    #[test]
    fn test_parse_empty_and_null_payloads() {
        assert!(parse_create_payload(b"").unwrap().is_none());
        assert!(parse_create_payload(b"  \n").unwrap().is_none());
        assert!(parse_create_payload(b"null").unwrap().is_none());
    }

    #[test]
    fn test_parse_malformed_payload() {
        let result = parse_create_payload(br#"{"firstName": "#);
        assert!(matches!(result, Err(ApiError::Validation(msg)) if msg.starts_with("Malformed")));

        let result = parse_create_payload(br#"{"age": "old"}"#);
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_parse_ignores_derived_fields() {
        let body = br#"{"id":"not-a-uuid","fullName":"X","terminationDate":"2020-01-01T00:00:00Z","firstName":"Ada"}"#;
        let req = parse_create_payload(body).unwrap().unwrap();
        assert_eq!(req.first_name.as_deref(), Some("Ada"));
    }
}
