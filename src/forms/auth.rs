use serde::Deserialize;
use validator::Validate;

use crate::domain::auth::Credentials;
use crate::domain::types::Email;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Sign-in form posted to `/login`.
pub struct LoginForm {
    /// Checked by [`Email::new`], which trims and lowercases first.
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl TryFrom<LoginForm> for Credentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let email = Email::new(form.email).map_err(|_| FormError::InvalidEmail)?;
        Ok(Credentials {
            email,
            password: form.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_normalizes_email() {
        let form = LoginForm {
            email: " Alex@TechStyle.com ".to_string(),
            password: "secret".to_string(),
        };

        let credentials = Credentials::try_from(form).unwrap();

        assert_eq!(credentials.email.as_str(), "alex@techstyle.com");
    }

    #[test]
    fn login_form_requires_password() {
        let form = LoginForm {
            email: "alex@techstyle.com".to_string(),
            password: String::new(),
        };

        assert!(matches!(
            Credentials::try_from(form),
            Err(FormError::Validation(_))
        ));
    }
}
