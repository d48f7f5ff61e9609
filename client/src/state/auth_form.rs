//! Login/register form models and client-side validation.
//!
//! DESIGN
//! ======
//! Forms are plain structs so validation can be exercised without a reactive
//! runtime. The auth page wraps `AuthFormState` in a single `RwSignal` and
//! routes every input event through `set_field`.
//!
//! Validation collects every failing field in one pass. The confirmation check
//! always runs, even when the identifier or password are already invalid.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Minimum password length for both forms, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum username length on the register form.
pub const MIN_REGISTER_IDENTIFIER_LEN: usize = 3;

/// Which form the auth card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// Card subtitle under the product name.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Welcome back! Sign in to continue.",
            Self::Register => "Join Orizu and start chatting securely.",
        }
    }

    /// Submit button caption; switches to a progress label while loading.
    pub fn submit_label(self, loading: bool) -> &'static str {
        match (self, loading) {
            (Self::Login, false) => "Sign In",
            (Self::Login, true) => "Signing in...",
            (Self::Register, false) => "Create Account",
            (Self::Register, true) => "Creating account...",
        }
    }

    /// Tab caption.
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

/// Input fields across both forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Identifier,
    DisplayName,
    Password,
    ConfirmPassword,
}

/// A single inline validation failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Username or Matrix ID is required")]
    IdentifierRequired,

    #[error("Username must be at least {min} characters")]
    IdentifierTooShort { min: usize },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords don't match")]
    PasswordMismatch,
}

/// Per-field validation errors for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Inline message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn into_result<T>(self, ok: T) -> Result<T, Self> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_password(errors: &mut FormErrors, password: &str) {
    if char_len(password) < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, FieldError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
}

/// Login form values. Defaults are empty strings.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every failing field when the identifier is empty or the
    /// password is shorter than [`MIN_PASSWORD_LEN`].
    pub fn validate(&self) -> Result<LoginSubmission, FormErrors> {
        let mut errors = FormErrors::default();
        if self.identifier.is_empty() {
            errors.insert(Field::Identifier, FieldError::IdentifierRequired);
        }
        check_password(&mut errors, &self.password);
        errors.into_result(LoginSubmission {
            identifier: self.identifier.clone(),
            password: self.password.clone(),
        })
    }
}

/// Register form values. An empty display name means "not provided".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub identifier: String,
    pub display_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every failing field: a username shorter than
    /// [`MIN_REGISTER_IDENTIFIER_LEN`], a short password, and a confirmation
    /// that differs from the password. The display name is never checked.
    pub fn validate(&self) -> Result<RegisterSubmission, FormErrors> {
        let mut errors = FormErrors::default();
        if char_len(&self.identifier) < MIN_REGISTER_IDENTIFIER_LEN {
            errors.insert(
                Field::Identifier,
                FieldError::IdentifierTooShort { min: MIN_REGISTER_IDENTIFIER_LEN },
            );
        }
        check_password(&mut errors, &self.password);
        if self.confirm_password != self.password {
            errors.insert(Field::ConfirmPassword, FieldError::PasswordMismatch);
        }
        let display_name = (!self.display_name.is_empty()).then(|| self.display_name.clone());
        errors.into_result(RegisterSubmission {
            identifier: self.identifier.clone(),
            display_name,
            password: self.password.clone(),
        })
    }
}

/// Validated login input.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub identifier: String,
    pub password: String,
}

/// Validated register input.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterSubmission {
    pub identifier: String,
    pub display_name: Option<String>,
    pub password: String,
}

/// A validated request ready for the (mock) auth backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginSubmission),
    Register(RegisterSubmission),
}

impl AuthRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::Login(_) => AuthMode::Login,
            Self::Register(_) => AuthMode::Register,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Self::Login(s) => &s.identifier,
            Self::Register(s) => &s.identifier,
        }
    }
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("identifier", &self.identifier)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("identifier", &self.identifier)
            .field("display_name", &self.display_name)
            .field("password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("identifier", &self.identifier)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for RegisterSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterSubmission")
            .field("identifier", &self.identifier)
            .field("display_name", &self.display_name)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Why `AuthFormState::submit` refused to produce a request.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    Busy,
    #[error("the form has validation errors")]
    Invalid,
}

/// Whole auth-card state: mode toggle, both forms, their errors, and the
/// shared loading flag.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub login: LoginForm,
    pub register: RegisterForm,
    pub login_errors: FormErrors,
    pub register_errors: FormErrors,
    pub loading: bool,
    login_attempted: bool,
    register_attempted: bool,
}

impl AuthFormState {
    /// Show `mode` and reset that form to its defaults. Asking for the mode
    /// already shown changes nothing.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        match mode {
            AuthMode::Login => {
                self.login = LoginForm::default();
                self.login_errors = FormErrors::default();
                self.login_attempted = false;
            }
            AuthMode::Register => {
                self.register = RegisterForm::default();
                self.register_errors = FormErrors::default();
                self.register_attempted = false;
            }
        }
    }

    /// Current value of `field` on the active form. Fields the active form
    /// does not have read as empty.
    pub fn value(&self, field: Field) -> &str {
        match (self.mode, field) {
            (AuthMode::Login, Field::Identifier) => &self.login.identifier,
            (AuthMode::Login, Field::Password) => &self.login.password,
            (AuthMode::Login, Field::DisplayName | Field::ConfirmPassword) => "",
            (AuthMode::Register, Field::Identifier) => &self.register.identifier,
            (AuthMode::Register, Field::DisplayName) => &self.register.display_name,
            (AuthMode::Register, Field::Password) => &self.register.password,
            (AuthMode::Register, Field::ConfirmPassword) => &self.register.confirm_password,
        }
    }

    /// Write `field` on the active form.
    ///
    /// After a failed submit the form re-validates on every change so inline
    /// errors clear as soon as the input becomes valid.
    pub fn set_field(&mut self, field: Field, value: String) {
        match (self.mode, field) {
            (AuthMode::Login, Field::Identifier) => self.login.identifier = value,
            (AuthMode::Login, Field::Password) => self.login.password = value,
            (AuthMode::Login, Field::DisplayName | Field::ConfirmPassword) => return,
            (AuthMode::Register, Field::Identifier) => self.register.identifier = value,
            (AuthMode::Register, Field::DisplayName) => self.register.display_name = value,
            (AuthMode::Register, Field::Password) => self.register.password = value,
            (AuthMode::Register, Field::ConfirmPassword) => self.register.confirm_password = value,
        }
        match self.mode {
            AuthMode::Login if self.login_attempted => {
                self.login_errors = self.login.validate().err().unwrap_or_default();
            }
            AuthMode::Register if self.register_attempted => {
                self.register_errors = self.register.validate().err().unwrap_or_default();
            }
            _ => {}
        }
    }

    /// Errors for the active form.
    pub fn errors(&self) -> &FormErrors {
        match self.mode {
            AuthMode::Login => &self.login_errors,
            AuthMode::Register => &self.register_errors,
        }
    }

    /// Validate the active form and, on success, enter the loading state.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::Busy`] while a submission is in flight (state is left
    /// untouched), [`SubmitRejected::Invalid`] when validation fails (errors
    /// are stored for inline display).
    pub fn submit(&mut self) -> Result<AuthRequest, SubmitRejected> {
        if self.loading {
            return Err(SubmitRejected::Busy);
        }
        let outcome = match self.mode {
            AuthMode::Login => {
                self.login_attempted = true;
                let result = self.login.validate();
                self.login_errors = result.as_ref().err().cloned().unwrap_or_default();
                result.map(AuthRequest::Login)
            }
            AuthMode::Register => {
                self.register_attempted = true;
                let result = self.register.validate();
                self.register_errors = result.as_ref().err().cloned().unwrap_or_default();
                result.map(AuthRequest::Register)
            }
        };
        let request = outcome.map_err(|_| SubmitRejected::Invalid)?;
        self.loading = true;
        Ok(request)
    }

    /// Leave the loading state once the simulated round trip completes.
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }
}
