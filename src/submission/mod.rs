pub mod schema;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A validated sign-up, ready to be appended to the destination sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Submission {
    /// Serialize to the destination row layout: name columns, email, then the
    /// server-assigned submission timestamp in column D.
    pub fn into_row(self, submitted_at: DateTime<Utc>) -> Vec<String> {
        vec![
            self.first_name,
            self.last_name,
            self.email,
            submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ]
    }
}
