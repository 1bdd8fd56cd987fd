//! Domain primitives, services, and ports.
//!
//! Purpose: model accounts, sessions, and notices independently of Actix so
//! the session gate can be exercised without HTTP or disk I/O.
//!
//! Public surface:
//! - Error / ErrorCode: JSON error payload and its stable code.
//! - LoginCredentials / NewAccount: validated form input.
//! - UserRecord / UserDirectory: registered accounts as persisted.
//! - AuthSession / Authorization: session identity and the guard outcome.
//! - AccountService: the session gate implementation.

pub mod account_service;
pub mod auth;
pub mod error;
pub mod notice;
pub mod ports;
pub mod session;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, NewAccount, PASSWORD_MIN_LEN, SignupValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::notice::{Notice, NoticeLevel};
pub use self::session::{AuthSession, Authorization, DenialReason};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserDirectory, UserRecord};

