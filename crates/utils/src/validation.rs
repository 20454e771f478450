//! Validation utilities

/// Kết quả validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Tạo kết quả valid
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
        }
    }

    /// Tạo kết quả invalid
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            Self::valid()
        } else {
            Self::invalid(errors)
        }
    }
}

/// Validate email format (đơn giản): `local@domain.tld`, đúng một `@`, không có khoảng trắng
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains("..")
        }
        None => false,
    }
}

/// Validate các field của user: name không rỗng, email đúng format
pub fn validate_user_fields(name: &str, email: &str) -> ValidationResult {
    let mut errors = vec![];

    if name.trim().is_empty() {
        errors.push("Name must not be empty".to_string());
    }

    if !validate_email(email) {
        errors.push(format!("Invalid email format: {}", email));
    }

    ValidationResult::from_errors(errors)
}
