//! Environment variable management for testing

use std::env;

/// Sets an environment variable for the lifetime of the guard and restores
/// the previous value when dropped
pub struct EnvVarGuard {
  key: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Set `key` to `value`
  pub fn set(key: &str, value: &str) -> Self {
    let original = env::var(key).ok();
    unsafe {
      env::set_var(key, value);
    }
    Self {
      key: key.to_string(),
      original,
    }
  }

  /// Remove `key` from the environment
  pub fn unset(key: &str) -> Self {
    let original = env::var(key).ok();
    unsafe {
      env::remove_var(key);
    }
    Self {
      key: key.to_string(),
      original,
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.key, val);
      },
      None => unsafe {
        env::remove_var(&self.key);
      },
    }
  }
}
