use std::time::Duration;

/// Runtime configuration, read from the environment (and `.env`).
#[derive(Clone, Debug)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    pub addr: String,
    /// Held results older than this are refetched on the next page load.
    pub refresh_after: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let supabase_url = env_or_fallback("SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("SUPABASE_URL is missing"))?;

        let supabase_key = env_or_fallback("SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY")
            .ok_or_else(|| anyhow::anyhow!("SUPABASE_ANON_KEY is missing"))?;

        let addr = env_nonempty("JOBBOARD_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string());

        let refresh_after = match env_nonempty("JOBBOARD_REFRESH_SECS") {
            Some(raw) => parse_secs(&raw)?,
            None => Duration::from_secs(60),
        };

        Ok(Self {
            supabase_url,
            supabase_key,
            addr,
            refresh_after,
        })
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn env_or_fallback(primary: &str, fallback: &str) -> Option<String> {
    env_nonempty(primary).or_else(|| env_nonempty(fallback))
}

fn parse_secs(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("JOBBOARD_REFRESH_SECS must be a whole number, got {raw:?}"))?;
    Ok(Duration::from_secs(secs))
}
