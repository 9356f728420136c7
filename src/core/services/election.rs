use chrono::{DateTime, Utc};

use crate::core::models::{
    common::{optional, required},
    election::{
        BallotCast, BallotInsert, BallotStatus, Candidate, CandidateCreate, CandidateInsert, Election, ElectionCreate, ElectionDetail, ElectionStatus, ElectionView, Insert,
        VoteReceipt,
    },
};
use crate::core::ports::repository::{BallotCommon, CandidateCommon, ElectionCommon, Store, TxStore};
use crate::error::Error;

pub fn normalize_voter(voter: &str) -> Result<String, Error> {
    let voter = voter.trim().to_lowercase();
    if voter.is_empty() {
        return Err(Error::InvalidInput("voter is required".into()));
    }
    Ok(voter)
}

pub async fn create<S>(store: &mut S, form: ElectionCreate, now: DateTime<Utc>) -> Result<Election, Error>
where
    S: Store,
{
    if form.start_date >= form.end_date {
        return Err(Error::InvalidInput("start_date must be before end_date".into()));
    }
    let election = ElectionCommon::insert(
        store,
        Insert {
            title: required("title", form.title)?,
            description: form.description.trim().to_owned(),
            start_date: form.start_date,
            end_date: form.end_date,
            created_at: now,
        },
    )
    .await?;
    log::info!("election {} scheduled", election.id);
    Ok(election)
}

pub async fn add_candidate<S>(store: &mut S, election_id: i32, form: CandidateCreate) -> Result<Candidate, Error>
where
    S: Store,
{
    ElectionCommon::get(store, election_id).await?;
    CandidateCommon::insert(
        store,
        CandidateInsert {
            election_id,
            name: required("name", form.name)?,
            bio: form.bio.trim().to_owned(),
            image_url: optional(form.image_url),
        },
    )
    .await
}

pub async fn list<S>(store: &mut S, now: DateTime<Utc>) -> Result<Vec<ElectionView>, Error>
where
    S: Store,
{
    let elections = ElectionCommon::query(store).await?;
    Ok(elections.into_iter().map(|e| ElectionView::new(e, now)).collect())
}

/// The election a visitor should see first: an active one, else an upcoming one, else the latest.
pub async fn current<S>(store: &mut S, now: DateTime<Utc>) -> Result<Option<ElectionView>, Error>
where
    S: Store,
{
    let views = list(store, now).await?;
    let pick = views
        .iter()
        .position(|v| v.status == ElectionStatus::Active)
        .or_else(|| views.iter().position(|v| v.status == ElectionStatus::Upcoming))
        .or(if views.is_empty() { None } else { Some(0) });
    Ok(pick.and_then(|i| views.into_iter().nth(i)))
}

pub async fn detail<S>(store: &mut S, id: i32, now: DateTime<Utc>) -> Result<ElectionDetail, Error>
where
    S: Store,
{
    let election = ElectionCommon::get(store, id).await?;
    let candidates = CandidateCommon::query(store, id).await?;
    Ok(ElectionDetail {
        election: ElectionView::new(election, now),
        candidates,
    })
}

async fn cast_in<S>(store: &mut S, election_id: i32, cast: BallotCast, now: DateTime<Utc>) -> Result<VoteReceipt, Error>
where
    S: Store,
{
    let voter = normalize_voter(&cast.voter)?;
    let election = ElectionCommon::get(store, election_id).await?;
    if election.status(now) != ElectionStatus::Active {
        return Err(Error::BusinessError("election is not open for voting".into()));
    }
    let candidate = CandidateCommon::get(store, cast.candidate_id).await?;
    if candidate.election_id != election_id {
        return Err(Error::InvalidInput("candidate does not stand in this election".into()));
    }
    if BallotCommon::find(store, election_id, &voter).await?.is_some() {
        return Err(Error::Conflict("you have already voted in this election".into()));
    }
    let ballot_id = BallotCommon::insert(
        store,
        BallotInsert {
            election_id,
            candidate_id: candidate.id,
            voter,
            created_at: now,
        },
    )
    .await?;
    let votes_count = CandidateCommon::increase_votes(store, candidate.id).await?;
    Ok(VoteReceipt {
        ballot_id,
        candidate_id: candidate.id,
        votes_count,
    })
}

/// Records one ballot and bumps the candidate's tally atomically.
pub async fn cast_vote<T>(mut tx: T, election_id: i32, cast: BallotCast, now: DateTime<Utc>) -> Result<VoteReceipt, Error>
where
    T: TxStore,
{
    match cast_in(&mut tx, election_id, cast, now).await {
        Ok(receipt) => {
            tx.commit().await?;
            log::info!("ballot {} cast in election {}", receipt.ballot_id, election_id);
            Ok(receipt)
        }
        Err(e) => {
            tx.rollback().await?;
            Err(e)
        }
    }
}

pub async fn ballot<S>(store: &mut S, election_id: i32, voter: &str) -> Result<BallotStatus, Error>
where
    S: Store,
{
    let voter = normalize_voter(voter)?;
    let ballot = BallotCommon::find(store, election_id, &voter).await?;
    Ok(BallotStatus {
        has_voted: ballot.is_some(),
        candidate_id: ballot.map(|b| b.candidate_id),
    })
}
