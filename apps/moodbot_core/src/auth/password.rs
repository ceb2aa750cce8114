use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm as ArgonAlgorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

fn hasher() -> Result<Argon2<'static>, anyhow::Error> {
    // Argon2id, ~19MB memory, 2 passes
    let params = Params::new(19456, 2, 1, None)?;
    Ok(Argon2::new(ArgonAlgorithm::Argon2id, Version::V0x13, params))
}

pub fn hash_password(password: &str) -> Result<String, anyhow::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(hasher()?.hash_password(password.as_bytes(), &salt)?.to_string())
}

pub fn verify_password(phc: &str, password: &str) -> Result<bool, anyhow::Error> {
    let parsed = PasswordHash::new(phc)?;
    Ok(hasher()?
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let phc = hash_password("sakura-latte").unwrap();
        assert!(phc.starts_with("$argon2id$"));
        assert!(verify_password(&phc, "sakura-latte").unwrap());
        assert!(!verify_password(&phc, "matcha-latte").unwrap());
    }

    #[test]
    fn salts_differ() {
        assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
    }

    #[test]
    fn corrupt_hash_is_an_error() {
        assert!(verify_password("not-a-phc-string", "x").is_err());
    }
}
