// Records exchanged with the rental backend.
// Dates travel as "YYYY-MM-DD" (chrono's NaiveDate serde format) and money as JSON numbers,
// which is exactly what the form helpers convert to and from.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Option<u64>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

// A rentable unit inside a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: Option<u64>,
    pub property_id: u64,
    pub number: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub id: Option<u64>,
    pub tenant_id: Option<u64>,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
}

// A lease ("aluguel") binding a tenant to a house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rent {
    pub id: Option<u64>,
    pub house_id: u64,
    pub tenant_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub value: f64,
    pub deposit: Option<f64>,
    pub due_day: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentStatus {
    Pending,
    Paid,
    Late,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub id: Option<u64>,
    pub rent_id: u64,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub paid_at: Option<NaiveDate>,
    pub status: InstallmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Option<u64>,
    pub property_id: u64,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_serializes_dates_as_iso_and_money_as_numbers() {
        let rent = Rent {
            id: None,
            house_id: 3,
            tenant_id: 7,
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            value: 1250.5,
            deposit: None,
            due_day: 10,
        };
        let json = serde_json::to_value(&rent).unwrap();
        assert_eq!(json["startDate"], "2024-02-01");
        assert_eq!(json["endDate"], "2025-01-31");
        assert_eq!(json["value"], 1250.5);
        assert_eq!(json["dueDay"], 10);
    }

    #[test]
    fn test_installment_reads_backend_payload() {
        let payload = r#"{
            "id": 12, "rentId": 4, "dueDate": "2024-03-10",
            "amount": 900.0, "paidAt": null, "status": "late"
        }"#;
        let installment: Installment = serde_json::from_str(payload).unwrap();
        assert_eq!(installment.status, InstallmentStatus::Late);
        assert_eq!(installment.due_date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!(installment.paid_at.is_none());
    }
}
