use crate::core::models::{
    blog::{BlogPost, Insert as BlogPostInsert, Query as BlogPostQuery},
    common::Pagination,
    election::{Ballot, BallotInsert, Candidate, CandidateInsert, Election, Insert as ElectionInsert},
    experience::{Experience, Insert as ExperienceInsert, Query as ExperienceQuery},
    notice::{Insert as NoticeInsert, Notice, Query as NoticeQuery},
    testimonial::{Insert as TestimonialInsert, Testimonial},
};
use crate::error::Error;

pub trait ExperienceCommon {
    async fn insert(&mut self, data: ExperienceInsert) -> Result<Experience, Error>;
    async fn query(&mut self, query: &ExperienceQuery, pagination: Option<Pagination>) -> Result<Vec<Experience>, Error>;
    async fn count(&mut self, query: &ExperienceQuery) -> Result<i64, Error>;
    async fn get(&mut self, id: i32) -> Result<Experience, Error>;
    async fn same_consulate(&mut self, consulate: &str, exclude: i32, limit: i64) -> Result<Vec<Experience>, Error>;
    async fn delete(&mut self, id: i32) -> Result<u64, Error>;
}

pub trait TestimonialCommon {
    async fn insert(&mut self, data: TestimonialInsert) -> Result<Testimonial, Error>;
    async fn query(&mut self, pagination: Option<Pagination>) -> Result<Vec<Testimonial>, Error>;
    async fn count(&mut self) -> Result<i64, Error>;
    async fn delete(&mut self, id: i32) -> Result<u64, Error>;
}

pub trait NoticeCommon {
    async fn insert(&mut self, data: NoticeInsert) -> Result<Notice, Error>;
    async fn query(&mut self, query: &NoticeQuery, pagination: Option<Pagination>) -> Result<Vec<Notice>, Error>;
    async fn get_by_slug(&mut self, slug: &str) -> Result<Notice, Error>;
    async fn slug_exists(&mut self, slug: &str) -> Result<bool, Error>;
    async fn set_active(&mut self, id: i32, active: bool) -> Result<Notice, Error>;
    async fn delete(&mut self, id: i32) -> Result<u64, Error>;
}

pub trait BlogPostCommon {
    async fn insert(&mut self, data: BlogPostInsert) -> Result<BlogPost, Error>;
    async fn query(&mut self, query: &BlogPostQuery, pagination: Option<Pagination>) -> Result<Vec<BlogPost>, Error>;
    async fn count(&mut self, query: &BlogPostQuery) -> Result<i64, Error>;
    async fn get_by_slug(&mut self, slug: &str) -> Result<BlogPost, Error>;
    async fn slug_exists(&mut self, slug: &str) -> Result<bool, Error>;
    async fn increase_views(&mut self, id: i32) -> Result<i32, Error>;
    async fn increase_likes(&mut self, slug: &str) -> Result<i32, Error>;
    async fn delete(&mut self, id: i32) -> Result<u64, Error>;
}

pub trait ElectionCommon {
    async fn insert(&mut self, data: ElectionInsert) -> Result<Election, Error>;
    async fn query(&mut self) -> Result<Vec<Election>, Error>;
    async fn get(&mut self, id: i32) -> Result<Election, Error>;
}

pub trait CandidateCommon {
    async fn insert(&mut self, data: CandidateInsert) -> Result<Candidate, Error>;
    async fn query(&mut self, election_id: i32) -> Result<Vec<Candidate>, Error>;
    async fn get(&mut self, id: i32) -> Result<Candidate, Error>;
    async fn increase_votes(&mut self, id: i32) -> Result<i32, Error>;
}

pub trait BallotCommon {
    async fn insert(&mut self, data: BallotInsert) -> Result<i32, Error>;
    async fn find(&mut self, election_id: i32, voter: &str) -> Result<Option<Ballot>, Error>;
}

pub trait Common: ExperienceCommon + TestimonialCommon + NoticeCommon + BlogPostCommon + ElectionCommon + CandidateCommon + BallotCommon {}

pub trait Store: Common {}

pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
    async fn rollback(self) -> Result<(), Error>;
}

pub trait Manager {
    type Store: Store;
    type TxStore: TxStore;

    async fn db(&self) -> Result<Self::Store, Error>;
    async fn tx(&self) -> Result<Self::TxStore, Error>;
}
