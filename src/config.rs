use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub algorithm: Algorithm,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub groq_api_key: Option<String>,
    pub groq_model: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "nutritrack".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "nutritrack-users".into()),
            algorithm: match std::env::var("JWT_ALGORITHM") {
                Ok(v) => v
                    .parse::<Algorithm>()
                    .map_err(|_| anyhow::anyhow!("unsupported JWT_ALGORITHM: {v}"))?,
                Err(_) => Algorithm::HS256,
            },
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let groq_api_key = std::env::var("GROQ_API_KEY").ok().filter(|v| !v.is_empty());
        let groq_model =
            std::env::var("GROQ_MODEL").unwrap_or_else(|_| "llama-3.3-70b-versatile".into());
        Ok(Self {
            database_url,
            jwt,
            groq_api_key,
            groq_model,
        })
    }
}
