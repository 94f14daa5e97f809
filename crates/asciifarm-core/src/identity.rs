//! Account name lookup for auto-derived player names.

use thiserror::Error;

/// Environment variables consulted for the login name, in order.
const LOGIN_ENV_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// The execution environment could not supply an account name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot determine the current account name: {reason}")]
pub struct IdentityError {
    reason: String,
}

impl IdentityError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Source of the invoking user's account name.
pub trait IdentityProvider {
    fn account_name(&self) -> Result<String, IdentityError>;
}

/// Reads the account name from the login environment, falling back to the
/// password database on unix.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl IdentityProvider for SystemIdentity {
    fn account_name(&self) -> Result<String, IdentityError> {
        if let Some(name) = login_name_from_env() {
            return Ok(name);
        }
        passwd_account_name().ok_or_else(|| {
            IdentityError::new(format!(
                "none of {} is set and no password entry exists for this user",
                LOGIN_ENV_VARS.join(", ")
            ))
        })
    }
}

fn login_name_from_env() -> Option<String> {
    LOGIN_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

#[cfg(unix)]
fn passwd_account_name() -> Option<String> {
    use std::ffi::CStr;

    let mut entry: libc::passwd = unsafe { std::mem::zeroed() };
    let mut buf = vec![0 as libc::c_char; 4096];
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    // SAFETY: every pointer refers to a live local, and `buf.len()` is the
    // real capacity of `buf`.
    let rc = unsafe {
        libc::getpwuid_r(
            libc::getuid(),
            &mut entry,
            buf.as_mut_ptr(),
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() || entry.pw_name.is_null() {
        return None;
    }

    // SAFETY: on success `pw_name` points to a NUL-terminated string in `buf`.
    let name = unsafe { CStr::from_ptr(entry.pw_name) };
    name.to_str()
        .ok()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(not(unix))]
fn passwd_account_name() -> Option<String> {
    None
}
