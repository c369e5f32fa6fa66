//! Value engineering contract
//!
//! Request shape and URL for `POST /value-engineering/{fileId}`, which
//! asks the backend for cheaper/pricier alternatives to the current BOQ.

use serde::{Deserialize, Serialize};

/// Budget tier requested for the alternatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetOption {
    Budgetary,
    Medium,
    HighEnd,
}

/// Request body of the value-engineering endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValueEngineeringRequest {
    pub budget_option: BudgetOption,
}

/// `POST /value-engineering/{fileId}`
pub fn value_engineering_url(file_id: &str) -> String {
    format!("/value-engineering/{}", file_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let body = ValueEngineeringRequest {
            budget_option: BudgetOption::HighEnd,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"budget_option":"high_end"}"#
        );
        let parsed: ValueEngineeringRequest =
            serde_json::from_str(r#"{"budget_option":"budgetary"}"#).unwrap();
        assert_eq!(parsed.budget_option, BudgetOption::Budgetary);
    }

    #[test]
    fn test_url() {
        assert_eq!(value_engineering_url("f1"), "/value-engineering/f1");
    }
}
