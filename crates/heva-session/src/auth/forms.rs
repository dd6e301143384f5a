/*
[INPUT]:  User-entered login and registration fields
[OUTPUT]: Validated request payloads or inline validation errors
[POS]:    Auth layer - client-side checks before any network call
[UPDATE]: When registration fields or password rules change
*/

use thiserror::Error;

use crate::types::{
    AdminDetails, CreativeDetails, FieldAgentDetails, Gender, LiteracyLevel, PrimaryDevice,
    RegistrationPayload, RoleDetails, UserType,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be accepted")]
    ConsentRequired(&'static str),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password too short: at least {min} characters required")]
    PasswordTooShort { min: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(())
    }
}

/// Registration form state: the common fields every role fills in plus the
/// extension for the chosen role.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
    pub gender: Gender,
    pub disability: bool,
    pub disability_type: String,
    pub marginalized_groups: Vec<String>,
    pub primary_device: PrimaryDevice,
    pub literacy_level: LiteracyLevel,
    pub consent_data_collection: bool,
    pub consent_contact: bool,
    pub role: RoleDetails,
}

impl RegistrationForm {
    /// Empty form for a role, with the defaults the sign-up screens start from
    pub fn new(user_type: UserType) -> Self {
        let role = match user_type {
            UserType::Creative => RoleDetails::Creative(CreativeDetails::default()),
            UserType::FieldAgent => RoleDetails::FieldAgent(FieldAgentDetails::default()),
            UserType::Admin | UserType::HevaTeam => RoleDetails::Admin(AdminDetails::default()),
        };

        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            full_name: String::new(),
            phone: String::new(),
            gender: Gender::default(),
            disability: false,
            disability_type: String::new(),
            marginalized_groups: Vec::new(),
            primary_device: PrimaryDevice::default(),
            literacy_level: LiteracyLevel::default(),
            consent_data_collection: true,
            consent_contact: true,
            role,
        }
    }

    pub fn user_type(&self) -> UserType {
        self.role.user_type()
    }

    /// Check the form and turn it into the registration body.
    ///
    /// Order of checks: common required fields, role fields, consents,
    /// password confirmation, password length.
    pub fn validate(self) -> Result<RegistrationPayload, ValidationError> {
        require("email", &self.email)?;
        require("full_name", &self.full_name)?;
        require("phone", &self.phone)?;
        self.role.check_required()?;

        if !self.consent_data_collection {
            return Err(ValidationError::ConsentRequired("consent_data_collection"));
        }
        if !self.consent_contact {
            return Err(ValidationError::ConsentRequired("consent_contact"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(RegistrationPayload {
            email: self.email,
            password: self.password,
            full_name: self.full_name,
            phone: self.phone,
            gender: self.gender,
            disability: self.disability,
            disability_type: self.disability_type,
            marginalized_groups: self.marginalized_groups,
            primary_device: self.primary_device,
            literacy_level: self.literacy_level,
            consent_data_collection: self.consent_data_collection,
            consent_contact: self.consent_contact,
            role: self.role,
        })
    }
}

impl RoleDetails {
    /// Fields the sign-up screen for this role marks as required
    fn check_required(&self) -> Result<(), ValidationError> {
        match self {
            RoleDetails::Creative(details) => require("creative_skills", &details.creative_skills),
            RoleDetails::FieldAgent(details) => {
                require("region", &details.region)?;
                require("organization", &details.organization)?;
                require("languages", &details.languages)?;
                require("specializations", &details.specializations)?;
                require("supervisor_name", &details.supervisor_name)?;
                require("supervisor_contact", &details.supervisor_contact)
            }
            RoleDetails::Admin(details) => {
                require("organization", &details.organization)?;
                require("department", &details.department)?;
                require("role", &details.role)?;
                require("emergency_contact", &details.emergency_contact)?;
                if !details.security_clearance {
                    return Err(ValidationError::ConsentRequired("security_clearance"));
                }
                Ok(())
            }
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
