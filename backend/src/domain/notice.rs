//! One-shot user notices shown on the next rendered page.

use serde::{Deserialize, Serialize};

/// Severity used to style a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Something the user must fix.
    Error,
    /// Confirmation of a completed action.
    Success,
}

impl NoticeLevel {
    /// Lowercase label used as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// A message queued for display exactly once.
///
/// # Examples
/// ```
/// use backend::domain::{Notice, NoticeLevel};
///
/// let notice = Notice::welcome_back("Ann");
/// assert_eq!(notice.level(), NoticeLevel::Success);
/// assert_eq!(notice.text(), "Welcome back, Ann!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    level: NoticeLevel,
    text: String,
}

impl Notice {
    /// An error notice with arbitrary text.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    /// A success notice with arbitrary text.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    /// Greeting after a successful login.
    pub fn welcome_back(name: &str) -> Self {
        Self::success(format!("Welcome back, {name}!"))
    }

    /// Greeting after a successful signup.
    pub fn account_created(name: &str) -> Self {
        Self::success(format!("Account created successfully! Welcome, {name}!"))
    }

    /// Farewell after logout.
    pub fn logged_out(name: &str) -> Self {
        Self::success(format!("You have been logged out. Goodbye, {name}!"))
    }

    /// Shown when an anonymous visitor hits a protected page.
    pub fn login_required() -> Self {
        Self::error("Please log in to access this page")
    }

    /// Shown when a form submission cannot be read at all.
    pub fn missing_fields() -> Self {
        Self::error("Please fill in all fields")
    }

    /// Shown when a form action fails for reasons the user cannot fix.
    pub fn try_again() -> Self {
        Self::error("Something went wrong, please try again")
    }

    /// Severity.
    pub fn level(&self) -> NoticeLevel {
        self.level
    }

    /// Message text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}
