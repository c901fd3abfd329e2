use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub jwt_secret: SecretString,
    pub cors_origin: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(jwt_secret: SecretString, cors_origin: String) -> Self {
        Self {
            jwt_secret,
            cors_origin,
        }
    }
}
