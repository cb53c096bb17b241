// src/domain/contact.rs

/// Raw contact form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation messages. A `None` field passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl ContactForm {
    /// Builds a form from decoded `key=value` pairs; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = ContactForm::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "name" => form.name = value.into(),
                "email" => form.email = value.into(),
                "message" => form.message = value.into(),
                _ => {}
            }
        }
        form
    }

    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required");
        } else if !looks_like_email(email) {
            errors.email = Some("Enter a valid email address");
        }

        if self.message.trim().is_empty() {
            errors.message = Some("Message is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}
