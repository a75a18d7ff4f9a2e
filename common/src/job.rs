use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A row of the `jobs` table, as returned by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Job {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub description: Option<String>,
    /// Raw type tag. Kept as a string so unknown tags survive the round trip.
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub job_type: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub apply_url: Option<String>,
    pub company: Option<String>,
    pub seniority_level: Option<String>,
    pub location_metro: Option<String>,
    pub work_arrangement: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub company_stage: Option<String>,
    pub primary_responsibilities: Option<String>,
}

/// Null and missing text columns read as an empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Job {
    /// The known job type, if the tag is one of [`JobType::ALL`].
    pub fn kind(&self) -> Option<JobType> {
        self.job_type.parse().ok()
    }
}

/// The fixed set of job categories offered by the filters panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    /// Panel order.
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    /// Tag used in the `type` query parameter and in the `type` column.
    pub fn key(self) -> &'static str {
        match self {
            JobType::FullTime => "full_time",
            JobType::PartTime => "part_time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownJobType(pub String);

impl fmt::Display for UnknownJobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown job type: {}", self.0)
    }
}

impl std::error::Error for UnknownJobType {}

impl FromStr for JobType {
    type Err = UnknownJobType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| UnknownJobType(s.to_string()))
    }
}
