//! Login and registration form validation

const MIN_USERNAME_LENGTH: usize = 3;
const MIN_PASSWORD_LENGTH: usize = 8;

/// Raw login form input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw registration form input
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field validation messages for the auth forms
#[derive(Debug, Default, PartialEq)]
pub struct AuthFormErrors {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub general: Option<String>,
}

impl AuthFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.general.is_none()
    }
}

fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    // Light-weight shape check only; the backend owns real address validation.
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Some("Enter a valid email address".to_string());
    }
    None
}

fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some(format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH))
    } else {
        None
    }
}

/// Validate a login form.
pub fn validate_login_form(form: &LoginForm) -> AuthFormErrors {
    AuthFormErrors {
        email: validate_email(&form.email),
        password: validate_password(&form.password),
        ..AuthFormErrors::default()
    }
}

/// Validate a registration form.
pub fn validate_register_form(form: &RegisterForm) -> AuthFormErrors {
    let mut errors = AuthFormErrors {
        email: validate_email(&form.email),
        password: validate_password(&form.password),
        ..AuthFormErrors::default()
    };

    let username = form.username.trim();
    if username.is_empty() {
        errors.username = Some("Username is required".to_string());
    } else if username.chars().count() < MIN_USERNAME_LENGTH {
        errors.username = Some(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        ));
    }

    if errors.password.is_none() && form.confirm_password != form.password {
        errors.confirm_password = Some("Passwords do not match".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_happy_path() {
        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(validate_login_form(&form).is_empty());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("").is_some());
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("@example.com").is_some());
        assert!(validate_email("user@nodot").is_some());
        assert!(validate_email("user@example.com").is_none());
    }

    #[test]
    fn test_register_password_confirmation() {
        let form = RegisterForm {
            email: "user@example.com".to_string(),
            username: "sam".to_string(),
            password: "longenough".to_string(),
            confirm_password: "different".to_string(),
        };
        let errors = validate_register_form(&form);
        assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_register_username_length() {
        let form = RegisterForm {
            email: "user@example.com".to_string(),
            username: "ab".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
        };
        assert!(validate_register_form(&form).username.is_some());
    }
}
