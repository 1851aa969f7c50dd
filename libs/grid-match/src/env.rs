//! Secure-environment detection.
//!
//! Remote farm credentials are injected as secrets. Forked pull request
//! builds on CI do not receive them, so targets declaring
//! `wants.secureEnv` must be excluded there.

use std::env;

/// Ambient environment classification, evaluated once per resolution.
pub trait Environment {
    /// Whether the current environment lacks the secrets that
    /// `wants.secureEnv` targets depend on.
    fn is_insecure(&self) -> bool;
}

/// Classification from process environment variables.
///
/// `BROWSERGRID_SECURE_ENV` overrides any inference: `"true"` or `"1"`
/// forces a secure environment, `"false"` or `"0"` an insecure one. When
/// unset or empty, falls back to CI hints: `TRAVIS_SECURE_ENV_VARS`
/// is `"false"` on forked pull request builds.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn is_insecure(&self) -> bool {
        classify(|name| env::var(name).ok())
    }
}

fn classify<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup("BROWSERGRID_SECURE_ENV").as_deref() {
        Some("true") | Some("1") => return false,
        Some("false") | Some("0") => return true,
        _ => {}
    }

    lookup("TRAVIS_SECURE_ENV_VARS").as_deref() == Some("false")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_secure() {
        assert!(!classify(env_with(&[])));
    }

    #[test]
    fn override_takes_precedence_over_inference() {
        assert!(!classify(env_with(&[
            ("BROWSERGRID_SECURE_ENV", "true"),
            ("TRAVIS_SECURE_ENV_VARS", "false"),
        ])));
        assert!(classify(env_with(&[("BROWSERGRID_SECURE_ENV", "false")])));
        assert!(classify(env_with(&[("BROWSERGRID_SECURE_ENV", "0")])));
    }

    #[test]
    fn empty_override_falls_back_to_ci_inference() {
        assert!(classify(env_with(&[
            ("BROWSERGRID_SECURE_ENV", ""),
            ("TRAVIS_SECURE_ENV_VARS", "false"),
        ])));
        assert!(!classify(env_with(&[("TRAVIS_SECURE_ENV_VARS", "true")])));
    }
}
