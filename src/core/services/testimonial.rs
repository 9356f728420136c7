use chrono::{DateTime, Utc};

use crate::core::carousel::{slide_count, Carousel};
use crate::core::models::{
    common::{email, optional, required, Pagination, Slide},
    testimonial::{Insert, Testimonial, TestimonialSubmit},
};
use crate::core::ports::repository::{Store, TestimonialCommon};
use crate::error::Error;

pub const PER_SLIDE: usize = 3;

pub async fn submit<S>(store: &mut S, form: TestimonialSubmit, now: DateTime<Utc>) -> Result<Testimonial, Error>
where
    S: Store,
{
    let data = Insert {
        name: required("name", form.name)?,
        email: email(form.email)?,
        university: required("university", form.university)?,
        role: optional(form.role),
        quote: required("quote", form.quote)?,
        photo_url: optional(form.photo_url),
        created_at: now,
    };
    let testimonial = TestimonialCommon::insert(store, data).await?;
    log::info!("testimonial {} submitted", testimonial.id);
    Ok(testimonial)
}

pub async fn query<S>(store: &mut S, pagination: Pagination) -> Result<(Vec<Testimonial>, i64), Error>
where
    S: Store,
{
    let total = TestimonialCommon::count(store).await?;
    let list = TestimonialCommon::query(store, Some(pagination)).await?;
    Ok((list, total))
}

pub async fn slides<S>(store: &mut S, slide: usize, per_slide: usize) -> Result<Slide<Testimonial>, Error>
where
    S: Store,
{
    if per_slide == 0 || per_slide > Pagination::MAX_SIZE as usize {
        return Err(Error::InvalidInput(format!("per_slide must be between 1 and {}", Pagination::MAX_SIZE)));
    }
    let count = TestimonialCommon::count(store).await? as usize;
    let carousel = match Carousel::starting_at(slide_count(count, per_slide), slide) {
        Some(c) => c,
        None => return Ok(Slide::empty()),
    };
    let page = Pagination::new(per_slide as i64, (carousel.index() * per_slide) as i64);
    let items = TestimonialCommon::query(store, Some(page)).await?;
    Ok(Slide {
        index: carousel.index(),
        total: carousel.len(),
        next: carousel.peek_next(),
        prev: carousel.peek_prev(),
        items,
    })
}

pub async fn delete<S>(store: &mut S, id: i32) -> Result<(), Error>
where
    S: Store,
{
    if TestimonialCommon::delete(store, id).await? == 0 {
        return Err(Error::NotFound("testimonial".into()));
    }
    log::info!("testimonial {} deleted", id);
    Ok(())
}
