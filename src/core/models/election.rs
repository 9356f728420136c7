use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    Upcoming,
    Active,
    Completed,
}

impl ElectionStatus {
    pub fn at(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now < start {
            Self::Upcoming
        } else if now < end {
            Self::Active
        } else {
            Self::Completed
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Election {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Election {
    pub fn status(&self, now: DateTime<Utc>) -> ElectionStatus {
        ElectionStatus::at(self.start_date, self.end_date, now)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ElectionView {
    #[serde(flatten)]
    pub election: Election,
    pub status: ElectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<String>,
}

impl ElectionView {
    pub fn new(election: Election, now: DateTime<Utc>) -> Self {
        let status = election.status(now);
        let time_remaining = match status {
            ElectionStatus::Upcoming => None,
            ElectionStatus::Active | ElectionStatus::Completed => Some(countdown(election.end_date, now)),
        };
        Self {
            election,
            status,
            time_remaining,
        }
    }
}

pub fn countdown(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (end - now).num_seconds();
    if secs <= 0 {
        return "Voting has ended".to_owned();
    }
    let (days, rest) = (secs / 86_400, secs % 86_400);
    let (hours, rest) = (rest / 3_600, rest % 3_600);
    let (minutes, seconds) = (rest / 60, rest % 60);
    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub id: i32,
    pub election_id: i32,
    pub name: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub votes_count: i32,
}

#[derive(Debug, Serialize)]
pub struct ElectionDetail {
    pub election: ElectionView,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElectionCreate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CandidateInsert {
    pub election_id: i32,
    pub name: String,
    pub bio: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ballot {
    pub id: i32,
    pub election_id: i32,
    pub candidate_id: i32,
    pub voter: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BallotCast {
    pub candidate_id: i32,
    #[serde(default)]
    pub voter: String,
}

#[derive(Debug, Clone)]
pub struct BallotInsert {
    pub election_id: i32,
    pub candidate_id: i32,
    pub voter: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct VoteReceipt {
    pub ballot_id: i32,
    pub candidate_id: i32,
    pub votes_count: i32,
}

#[derive(Debug, Serialize)]
pub struct BallotStatus {
    pub has_voted: bool,
    pub candidate_id: Option<i32>,
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_status_boundaries() {
        let start = Utc::now();
        let end = start + Duration::days(14);
        assert_eq!(ElectionStatus::at(start, end, start - Duration::seconds(1)), ElectionStatus::Upcoming);
        assert_eq!(ElectionStatus::at(start, end, start), ElectionStatus::Active);
        assert_eq!(ElectionStatus::at(start, end, end - Duration::seconds(1)), ElectionStatus::Active);
        assert_eq!(ElectionStatus::at(start, end, end), ElectionStatus::Completed);
    }

    #[test]
    fn test_countdown() {
        let now = Utc::now();
        let end = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
        assert_eq!(countdown(end, now), "2d 3h 4m 5s");
        assert_eq!(countdown(now, now), "Voting has ended");
    }

    #[test]
    fn test_view() {
        let now = Utc::now();
        let election = Election {
            id: 1,
            title: "Admin Elections 2025".into(),
            description: String::new(),
            start_date: now + Duration::days(1),
            end_date: now + Duration::days(8),
            created_at: now,
        };
        let view = ElectionView::new(election, now);
        assert_eq!(view.status, ElectionStatus::Upcoming);
        assert!(view.time_remaining.is_none());
        let v = serde_json::to_value(&view).unwrap();
        assert_eq!(v["status"], "upcoming");
        assert_eq!(v["title"], "Admin Elections 2025");
    }
}
