use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials for `POST /auth/login`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Account e-mail
    pub email: String,
    /// Account password
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// New account for `POST /auth/register`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Account e-mail
    pub email: String,
    /// Account password
    pub password: String,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Creates a registration request without a phone number
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: None,
        }
    }

    /// Set the phone number
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("phone", &self.phone)
            .finish()
    }
}

/// Area in which the mortgaged property is located
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PropertyArea {
    /// Urban area
    #[default]
    Urban,
    /// Semi-urban area
    Semiurban,
    /// Rural area
    Rural,
}

/// Applicant profile used both for loan applications and eligibility
/// predictions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    /// Applicant gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Whether the applicant is married
    pub married: bool,
    /// Number of dependents
    pub dependents: u32,
    /// Whether the applicant is a graduate
    pub graduate: bool,
    /// Whether the applicant is self employed
    pub self_employed: bool,
    /// Monthly applicant income
    pub applicant_income: f64,
    /// Monthly co-applicant income
    pub coapplicant_income: f64,
    /// Requested amount
    pub loan_amount: f64,
    /// Loan term in months
    pub loan_amount_term: u32,
    /// Whether the applicant has a clean credit history
    pub credit_history: bool,
    /// Property location
    pub property_area: PropertyArea,
}

impl ApplicantProfile {
    /// Creates a profile with the amount and term filled in
    #[must_use]
    pub fn new(loan_amount: f64, loan_amount_term: u32) -> Self {
        Self {
            loan_amount,
            loan_amount_term,
            ..Default::default()
        }
    }

    /// Set the gender
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Set the incomes
    #[must_use]
    pub fn with_income(mut self, applicant: f64, coapplicant: f64) -> Self {
        self.applicant_income = applicant;
        self.coapplicant_income = coapplicant;
        self
    }

    /// Set the credit history flag
    #[must_use]
    pub fn with_credit_history(mut self, clean: bool) -> Self {
        self.credit_history = clean;
        self
    }

    /// Set the property area
    #[must_use]
    pub fn with_property_area(mut self, area: PropertyArea) -> Self {
        self.property_area = area;
        self
    }

    /// Set the household details
    #[must_use]
    pub fn with_household(mut self, married: bool, dependents: u32) -> Self {
        self.married = married;
        self.dependents = dependents;
        self
    }

    /// Set the education and employment details
    #[must_use]
    pub fn with_employment(mut self, graduate: bool, self_employed: bool) -> Self {
        self.graduate = graduate;
        self.self_employed = self_employed;
        self
    }

    /// Combined monthly income of applicant and co-applicant
    #[must_use]
    pub fn total_income(&self) -> f64 {
        self.applicant_income + self.coapplicant_income
    }
}

/// Body for `POST /loans/apply`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationRequest {
    /// Declared purpose of the loan
    pub purpose: String,
    /// Applicant details
    #[serde(flatten)]
    pub applicant: ApplicantProfile,
}

impl LoanApplicationRequest {
    /// Creates an application for `purpose`
    pub fn new(purpose: impl Into<String>, applicant: ApplicantProfile) -> Self {
        Self {
            purpose: purpose.into(),
            applicant,
        }
    }
}

/// Body for `POST /predict/eligibility`
pub type EligibilityRequest = ApplicantProfile;

/// Body for `PUT /user/profile`; only set fields are sent
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New e-mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UpdateProfileRequest {
    /// Creates an empty update
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the e-mail
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone number
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
