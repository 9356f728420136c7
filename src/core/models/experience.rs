use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Approval {
    #[default]
    Yes,
    No,
    Administrative,
}

impl Approval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Approval::Yes => "yes",
            Approval::No => "no",
            Approval::Administrative => "administrative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Approval::Yes => "Approved",
            Approval::No => "Denied",
            Approval::Administrative => "Administrative Processing",
        }
    }
}

impl FromStr for Approval {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "administrative" => Ok(Self::Administrative),
            _ => Err(Error::InvalidInput(format!("unknown approval status: {}", s))),
        }
    }
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub email: String,
    pub university: String,
    pub consulate: String,
    pub major: String,
    pub interview_date: NaiveDate,
    pub approved: Approval,
    pub status_label: &'static str,
    pub experience: String,
    pub created_at: DateTime<Utc>,
}

/// Public submission form. Missing strings deserialize as empty and fail validation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExperienceSubmit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub consulate: String,
    #[serde(default)]
    pub interview_date: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub approved: Approval,
    #[serde(default)]
    pub experience: String,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub name: String,
    pub email: String,
    pub university: String,
    pub consulate: String,
    pub major: String,
    pub interview_date: NaiveDate,
    pub approved: Approval,
    pub experience: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub approved: Option<Approval>,
    pub search: Option<String>,
}

impl Query {
    /// `approved` accepts `all` (or nothing) as "no outcome filter".
    pub fn parse(approved: Option<&str>, search: Option<String>) -> Result<Self, Error> {
        let approved = match approved {
            None | Some("") | Some("all") => None,
            Some(s) => Some(s.parse()?),
        };
        Ok(Self {
            approved,
            search: search.filter(|s| !s.is_empty()),
        })
    }

    pub fn matches(&self, exp: &Experience) -> bool {
        if let Some(approved) = self.approved {
            if exp.approved != approved {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            return [&exp.name, &exp.consulate, &exp.university, &exp.major, &exp.experience]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
        }
        true
    }
}

#[derive(Debug, Serialize)]
pub struct ExperienceDetail {
    pub experience: Experience,
    pub related: Vec<Experience>,
}

#[cfg(test)]
pub(crate) fn sample(id: i32, name: &str, consulate: &str, approved: Approval) -> Experience {
    Experience {
        id,
        name: name.into(),
        email: format!("{}@example.com", id),
        university: "Kathmandu University".into(),
        consulate: consulate.into(),
        major: "Computer Science".into(),
        interview_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        approved,
        status_label: approved.label(),
        experience: "The officer asked about my sponsor.".into(),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_approval_parse() {
        assert_eq!("administrative".parse::<Approval>().unwrap(), Approval::Administrative);
        assert!("maybe".parse::<Approval>().is_err());
        assert_eq!(Approval::No.label(), "Denied");
    }

    #[test]
    fn test_query_parse() {
        let q = Query::parse(Some("all"), Some(String::new())).unwrap();
        assert!(q.approved.is_none() && q.search.is_none());
        let q = Query::parse(Some("no"), Some("nepal".into())).unwrap();
        assert_eq!(q.approved, Some(Approval::No));
        assert!(Query::parse(Some("approved"), None).is_err());
    }

    #[test]
    fn test_filter_by_outcome() {
        let exps = vec![
            sample(1, "Sujan K.", "Nepal", Approval::Yes),
            sample(2, "Anisha S.", "Nepal", Approval::No),
            sample(3, "Ravi P.", "Mumbai", Approval::Administrative),
        ];
        let q = Query::parse(Some("administrative"), None).unwrap();
        let found: Vec<i32> = exps.iter().filter(|e| q.matches(e)).map(|e| e.id).collect();
        assert_eq!(found, vec![3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut exp = sample(1, "Sujan K.", "Nepal", Approval::Yes);
        exp.major = "Data Science".into();
        let q = Query::parse(None, Some("NEP".into())).unwrap();
        assert!(q.matches(&exp));
        let q = Query::parse(None, Some("data sci".into())).unwrap();
        assert!(q.matches(&exp));
        let q = Query::parse(None, Some("harvard".into())).unwrap();
        assert!(!q.matches(&exp));
        let q = Query::parse(Some("no"), Some("nepal".into())).unwrap();
        assert!(!q.matches(&exp));
    }

    #[test]
    fn test_email_is_private() {
        let exp = sample(7, "Sujan K.", "Nepal", Approval::Yes);
        let v = serde_json::to_value(&exp).unwrap();
        assert!(v.get("email").is_none());
        assert_eq!(v["approved"], "yes");
        assert_eq!(v["status_label"], "Approved");
        assert_eq!(v["interview_date"], "2024-04-10");
    }
}
