use chrono::{DateTime, NaiveDate, Utc};

use crate::core::carousel::Carousel;
use crate::core::models::{
    common::{email, required, Pagination, Slide},
    experience::{Experience, ExperienceDetail, ExperienceSubmit, Insert, Query},
};
use crate::core::ports::repository::{ExperienceCommon, Store};
use crate::error::Error;

pub const RELATED_LIMIT: i64 = 3;
pub const ROTATION_SECS: i64 = 5;

pub async fn submit<S>(store: &mut S, form: ExperienceSubmit, now: DateTime<Utc>) -> Result<Experience, Error>
where
    S: Store,
{
    let interview_date = required("interview_date", form.interview_date)?;
    let interview_date = NaiveDate::parse_from_str(interview_date.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidInput("interview_date must be YYYY-MM-DD".into()))?;
    let data = Insert {
        name: required("name", form.name)?,
        email: email(form.email)?,
        university: required("university", form.university)?,
        consulate: required("consulate", form.consulate)?,
        major: required("major", form.major)?,
        interview_date,
        approved: form.approved,
        experience: required("experience", form.experience)?,
        created_at: now,
    };
    let exp = ExperienceCommon::insert(store, data).await?;
    log::info!("visa experience {} submitted for {}", exp.id, exp.consulate);
    Ok(exp)
}

pub async fn query<S>(store: &mut S, query: &Query, pagination: Pagination) -> Result<(Vec<Experience>, i64), Error>
where
    S: Store,
{
    let total = ExperienceCommon::count(store, query).await?;
    let list = ExperienceCommon::query(store, query, Some(pagination)).await?;
    Ok((list, total))
}

pub async fn detail<S>(store: &mut S, id: i32) -> Result<ExperienceDetail, Error>
where
    S: Store,
{
    let experience = ExperienceCommon::get(store, id).await?;
    let related = ExperienceCommon::same_consulate(store, &experience.consulate, id, RELATED_LIMIT).await?;
    Ok(ExperienceDetail { experience, related })
}

/// Single item carousel over every experience, newest first. Without an explicit
/// index the position follows the wall clock, one step per rotation period.
pub async fn highlight<S>(store: &mut S, index: Option<usize>, now: DateTime<Utc>) -> Result<Slide<Experience>, Error>
where
    S: Store,
{
    let all = Query::default();
    let total = ExperienceCommon::count(store, &all).await? as usize;
    let mut carousel = match Carousel::new(total) {
        Some(c) => c,
        None => return Ok(Slide::empty()),
    };
    match index {
        Some(i) => carousel.jump(i),
        None => carousel.advance((now.timestamp() / ROTATION_SECS).max(0) as u64),
    };
    let items = ExperienceCommon::query(store, &all, Some(Pagination::new(1, carousel.index() as i64))).await?;
    Ok(Slide {
        index: carousel.index(),
        total,
        next: carousel.peek_next(),
        prev: carousel.peek_prev(),
        items,
    })
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if ExperienceCommon::delete(store, id).await? == 0 {
        return Err(Error::NotFound("experience".into()));
    }
    log::info!("visa experience {} deleted", id);
    Ok(())
}
