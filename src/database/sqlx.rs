use chrono::{DateTime, NaiveDate, Utc};
use sqlx::pool::PoolConnection;
use sqlx::{query, query_as, query_scalar, Executor, FromRow, PgPool, Postgres, QueryBuilder, Transaction};

use crate::core::models::{
    blog::{BlogPost, Insert as BlogPostInsert, Query as BlogPostQuery},
    common::Pagination,
    election::{Ballot, BallotInsert, Candidate, CandidateInsert, Election, Insert as ElectionInsert},
    experience::{Approval, Experience, Insert as ExperienceInsert, Query as ExperienceQuery},
    notice::{Insert as NoticeInsert, Notice, Query as NoticeQuery},
    testimonial::{Insert as TestimonialInsert, Testimonial},
};
use crate::core::ports::repository::{
    BallotCommon, BlogPostCommon, CandidateCommon, Common, ElectionCommon, ExperienceCommon, Manager, NoticeCommon, Store, TestimonialCommon, TxStore,
};
use crate::error::Error;

const EXPERIENCE_SEARCH_COLUMNS: [&str; 5] = ["name", "consulate", "university", "major", "experience"];
const BLOG_SEARCH_COLUMNS: [&str; 2] = ["title", "content"];

pub struct PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    executor: E,
}

impl<E> PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[derive(Debug, Clone)]
pub struct PgSqlxManager {
    pool: PgPool,
}

impl PgSqlxManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

impl Manager for PgSqlxManager {
    type Store = PgSqlx<PoolConnection<Postgres>>;
    type TxStore = PgSqlx<Transaction<'static, Postgres>>;

    async fn db(&self) -> Result<Self::Store, Error> {
        let conn = self.pool.acquire().await?;
        Ok(PgSqlx::new(conn))
    }

    async fn tx(&self) -> Result<Self::TxStore, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSqlx::new(tx))
    }
}

impl<E> Common for PgSqlx<E> where for<'e> &'e mut E: Executor<'e, Database = Postgres> {}

impl<E> Store for PgSqlx<E> where for<'e> &'e mut E: Executor<'e, Database = Postgres> {}

impl TxStore for PgSqlx<Transaction<'static, Postgres>> {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        self.executor.rollback().await?;
        Ok(())
    }
}

/// `(a OR b OR ...)` where each term is a case-insensitive substring test against one column.
fn push_search(builder: &mut QueryBuilder<'_, Postgres>, columns: &[&str], term: &str) {
    builder.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            builder.push(" OR ");
        }
        builder.push(format!("STRPOS(LOWER({}), LOWER(", column));
        builder.push_bind(term.to_owned());
        builder.push(")) > 0");
    }
    builder.push(")");
}

fn push_page(builder: &mut QueryBuilder<'_, Postgres>, pagination: Option<Pagination>) {
    if let Some(p) = pagination {
        builder.push(" LIMIT ");
        builder.push_bind(p.limit());
        builder.push(" OFFSET ");
        builder.push_bind(p.offset());
    }
}

#[derive(Debug, FromRow)]
struct ExperienceRow {
    id: i32,
    name: String,
    email: String,
    university: String,
    consulate: String,
    major: String,
    interview_date: NaiveDate,
    approved: String,
    experience: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ExperienceRow> for Experience {
    type Error = Error;
    fn try_from(row: ExperienceRow) -> Result<Self, Self::Error> {
        let approved: Approval = row.approved.parse()?;
        Ok(Experience {
            id: row.id,
            name: row.name,
            email: row.email,
            university: row.university,
            consulate: row.consulate,
            major: row.major,
            interview_date: row.interview_date,
            approved,
            status_label: approved.label(),
            experience: row.experience,
            created_at: row.created_at,
        })
    }
}

fn experiences(rows: Vec<ExperienceRow>) -> Result<Vec<Experience>, Error> {
    rows.into_iter().map(Experience::try_from).collect()
}

fn experience_filter<'a>(select: &str, query: &ExperienceQuery) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new(select);
    builder.push(" FROM visa_experiences WHERE TRUE");
    if let Some(approved) = query.approved {
        builder.push(" AND approved = ");
        builder.push_bind(approved.as_str());
    }
    if let Some(term) = &query.search {
        push_search(&mut builder, &EXPERIENCE_SEARCH_COLUMNS, term);
    }
    builder
}

impl<E> ExperienceCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: ExperienceInsert) -> Result<Experience, Error> {
        let row: ExperienceRow = query_as(
            "
        INSERT INTO visa_experiences (name, email, university, consulate, major, interview_date, approved, experience, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *",
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.university)
        .bind(data.consulate)
        .bind(data.major)
        .bind(data.interview_date)
        .bind(data.approved.as_str())
        .bind(data.experience)
        .bind(data.created_at)
        .fetch_one(&mut self.executor)
        .await?;
        row.try_into()
    }

    async fn query(&mut self, query: &ExperienceQuery, pagination: Option<Pagination>) -> Result<Vec<Experience>, Error> {
        let mut builder = experience_filter("SELECT *", query);
        builder.push(" ORDER BY created_at DESC, id DESC");
        push_page(&mut builder, pagination);
        let rows = builder.build_query_as::<ExperienceRow>().fetch_all(&mut self.executor).await?;
        experiences(rows)
    }

    async fn count(&mut self, query: &ExperienceQuery) -> Result<i64, Error> {
        let mut builder = experience_filter("SELECT COUNT(*)", query);
        let (total,) = builder.build_query_as::<(i64,)>().fetch_one(&mut self.executor).await?;
        Ok(total)
    }

    async fn get(&mut self, id: i32) -> Result<Experience, Error> {
        let row: Option<ExperienceRow> = query_as("SELECT * FROM visa_experiences WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut self.executor)
            .await?;
        row.ok_or_else(|| Error::NotFound("experience".into()))?.try_into()
    }

    async fn same_consulate(&mut self, consulate: &str, exclude: i32, limit: i64) -> Result<Vec<Experience>, Error> {
        let rows = query_as(
            "
        SELECT *
        FROM visa_experiences
        WHERE consulate = $1 AND id <> $2
        ORDER BY created_at DESC, id DESC
        LIMIT $3",
        )
        .bind(consulate)
        .bind(exclude)
        .bind(limit)
        .fetch_all(&mut self.executor)
        .await?;
        experiences(rows)
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        let res = query("DELETE FROM visa_experiences WHERE id = $1").bind(id).execute(&mut self.executor).await?;
        Ok(res.rows_affected())
    }
}

#[derive(Debug, FromRow)]
struct TestimonialRow {
    id: i32,
    name: String,
    email: String,
    university: String,
    role: Option<String>,
    quote: String,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<TestimonialRow> for Testimonial {
    fn from(row: TestimonialRow) -> Self {
        Testimonial {
            id: row.id,
            name: row.name,
            email: row.email,
            university: row.university,
            role: row.role,
            quote: row.quote,
            photo_url: row.photo_url,
            created_at: row.created_at,
        }
    }
}

impl<E> TestimonialCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: TestimonialInsert) -> Result<Testimonial, Error> {
        let row: TestimonialRow = query_as(
            "
        INSERT INTO testimonials (name, email, university, role, quote, photo_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *",
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.university)
        .bind(data.role)
        .bind(data.quote)
        .bind(data.photo_url)
        .bind(data.created_at)
        .fetch_one(&mut self.executor)
        .await?;
        Ok(row.into())
    }

    async fn query(&mut self, pagination: Option<Pagination>) -> Result<Vec<Testimonial>, Error> {
        let mut builder = QueryBuilder::new("SELECT * FROM testimonials ORDER BY created_at DESC, id DESC");
        push_page(&mut builder, pagination);
        let rows = builder.build_query_as::<TestimonialRow>().fetch_all(&mut self.executor).await?;
        Ok(rows.into_iter().map(Testimonial::from).collect())
    }

    async fn count(&mut self) -> Result<i64, Error> {
        let total = query_scalar("SELECT COUNT(*) FROM testimonials").fetch_one(&mut self.executor).await?;
        Ok(total)
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        let res = query("DELETE FROM testimonials WHERE id = $1").bind(id).execute(&mut self.executor).await?;
        Ok(res.rows_affected())
    }
}

#[derive(Debug, FromRow)]
struct NoticeRow {
    id: i32,
    title: String,
    slug: String,
    content: String,
    image_url: Option<String>,
    is_emergency: bool,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<NoticeRow> for Notice {
    fn from(row: NoticeRow) -> Self {
        Notice {
            id: row.id,
            title: row.title,
            slug: row.slug,
            content: row.content,
            image_url: row.image_url,
            is_emergency: row.is_emergency,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl<E> NoticeCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: NoticeInsert) -> Result<Notice, Error> {
        let row: NoticeRow = query_as(
            "
        INSERT INTO notices (title, slug, content, image_url, is_emergency, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *",
        )
        .bind(data.title)
        .bind(data.slug)
        .bind(data.content)
        .bind(data.image_url)
        .bind(data.is_emergency)
        .bind(data.is_active)
        .bind(data.created_at)
        .fetch_one(&mut self.executor)
        .await?;
        Ok(row.into())
    }

    async fn query(&mut self, query: &NoticeQuery, pagination: Option<Pagination>) -> Result<Vec<Notice>, Error> {
        let mut builder = QueryBuilder::new("SELECT * FROM notices WHERE TRUE");
        if let Some(active) = query.active {
            builder.push(" AND is_active = ");
            builder.push_bind(active);
        }
        if let Some(emergency) = query.emergency {
            builder.push(" AND is_emergency = ");
            builder.push_bind(emergency);
        }
        builder.push(" ORDER BY created_at DESC, id DESC");
        push_page(&mut builder, pagination);
        let rows = builder.build_query_as::<NoticeRow>().fetch_all(&mut self.executor).await?;
        Ok(rows.into_iter().map(Notice::from).collect())
    }

    async fn get_by_slug(&mut self, slug: &str) -> Result<Notice, Error> {
        let row: Option<NoticeRow> = query_as("SELECT * FROM notices WHERE slug = $1").bind(slug).fetch_optional(&mut self.executor).await?;
        row.map(Notice::from).ok_or_else(|| Error::NotFound("notice".into()))
    }

    async fn slug_exists(&mut self, slug: &str) -> Result<bool, Error> {
        let exists = query_scalar("SELECT EXISTS(SELECT 1 FROM notices WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(exists)
    }

    async fn set_active(&mut self, id: i32, active: bool) -> Result<Notice, Error> {
        let row: Option<NoticeRow> = query_as("UPDATE notices SET is_active = $1 WHERE id = $2 RETURNING *")
            .bind(active)
            .bind(id)
            .fetch_optional(&mut self.executor)
            .await?;
        row.map(Notice::from).ok_or_else(|| Error::NotFound("notice".into()))
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        let res = query("DELETE FROM notices WHERE id = $1").bind(id).execute(&mut self.executor).await?;
        Ok(res.rows_affected())
    }
}

#[derive(Debug, FromRow)]
struct BlogPostRow {
    id: i32,
    title: String,
    slug: String,
    content: String,
    author: String,
    author_avatar_url: Option<String>,
    tags: Vec<String>,
    likes: i32,
    views: i32,
    created_at: DateTime<Utc>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            id: row.id,
            title: row.title,
            slug: row.slug,
            content: row.content,
            author: row.author,
            author_avatar_url: row.author_avatar_url,
            tags: row.tags,
            likes: row.likes,
            views: row.views,
            created_at: row.created_at,
        }
    }
}

fn blog_filter<'a>(select: &str, query: &BlogPostQuery) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new(select);
    builder.push(" FROM blog_posts WHERE TRUE");
    if let Some(term) = &query.search {
        push_search(&mut builder, &BLOG_SEARCH_COLUMNS, term);
    }
    builder
}

impl<E> BlogPostCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: BlogPostInsert) -> Result<BlogPost, Error> {
        let row: BlogPostRow = query_as(
            "
        INSERT INTO blog_posts (title, slug, content, author, author_avatar_url, tags, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *",
        )
        .bind(data.title)
        .bind(data.slug)
        .bind(data.content)
        .bind(data.author)
        .bind(data.author_avatar_url)
        .bind(data.tags)
        .bind(data.created_at)
        .fetch_one(&mut self.executor)
        .await?;
        Ok(row.into())
    }

    async fn query(&mut self, query: &BlogPostQuery, pagination: Option<Pagination>) -> Result<Vec<BlogPost>, Error> {
        let mut builder = blog_filter("SELECT *", query);
        builder.push(" ORDER BY created_at DESC, id DESC");
        push_page(&mut builder, pagination);
        let rows = builder.build_query_as::<BlogPostRow>().fetch_all(&mut self.executor).await?;
        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn count(&mut self, query: &BlogPostQuery) -> Result<i64, Error> {
        let mut builder = blog_filter("SELECT COUNT(*)", query);
        let (total,) = builder.build_query_as::<(i64,)>().fetch_one(&mut self.executor).await?;
        Ok(total)
    }

    async fn get_by_slug(&mut self, slug: &str) -> Result<BlogPost, Error> {
        let row: Option<BlogPostRow> = query_as("SELECT * FROM blog_posts WHERE slug = $1").bind(slug).fetch_optional(&mut self.executor).await?;
        row.map(BlogPost::from).ok_or_else(|| Error::NotFound("blog post".into()))
    }

    async fn slug_exists(&mut self, slug: &str) -> Result<bool, Error> {
        let exists = query_scalar("SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(exists)
    }

    async fn increase_views(&mut self, id: i32) -> Result<i32, Error> {
        let views: Option<i32> = query_scalar("UPDATE blog_posts SET views = views + 1 WHERE id = $1 RETURNING views")
            .bind(id)
            .fetch_optional(&mut self.executor)
            .await?;
        views.ok_or_else(|| Error::NotFound("blog post".into()))
    }

    async fn increase_likes(&mut self, slug: &str) -> Result<i32, Error> {
        let likes: Option<i32> = query_scalar("UPDATE blog_posts SET likes = likes + 1 WHERE slug = $1 RETURNING likes")
            .bind(slug)
            .fetch_optional(&mut self.executor)
            .await?;
        likes.ok_or_else(|| Error::NotFound("blog post".into()))
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        let res = query("DELETE FROM blog_posts WHERE id = $1").bind(id).execute(&mut self.executor).await?;
        Ok(res.rows_affected())
    }
}

#[derive(Debug, FromRow)]
struct ElectionRow {
    id: i32,
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<ElectionRow> for Election {
    fn from(row: ElectionRow) -> Self {
        Election {
            id: row.id,
            title: row.title,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
        }
    }
}

impl<E> ElectionCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: ElectionInsert) -> Result<Election, Error> {
        let row: ElectionRow = query_as(
            "
        INSERT INTO elections (title, description, start_date, end_date, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *",
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.created_at)
        .fetch_one(&mut self.executor)
        .await?;
        Ok(row.into())
    }

    async fn query(&mut self) -> Result<Vec<Election>, Error> {
        let rows: Vec<ElectionRow> = query_as("SELECT * FROM elections ORDER BY start_date DESC, id DESC").fetch_all(&mut self.executor).await?;
        Ok(rows.into_iter().map(Election::from).collect())
    }

    async fn get(&mut self, id: i32) -> Result<Election, Error> {
        let row: Option<ElectionRow> = query_as("SELECT * FROM elections WHERE id = $1").bind(id).fetch_optional(&mut self.executor).await?;
        row.map(Election::from).ok_or_else(|| Error::NotFound("election".into()))
    }
}

#[derive(Debug, FromRow)]
struct CandidateRow {
    id: i32,
    election_id: i32,
    name: String,
    bio: String,
    image_url: Option<String>,
    votes_count: i32,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Candidate {
            id: row.id,
            election_id: row.election_id,
            name: row.name,
            bio: row.bio,
            image_url: row.image_url,
            votes_count: row.votes_count,
        }
    }
}

impl<E> CandidateCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: CandidateInsert) -> Result<Candidate, Error> {
        let row: CandidateRow = query_as("INSERT INTO candidates (election_id, name, bio, image_url) VALUES ($1, $2, $3, $4) RETURNING *")
            .bind(data.election_id)
            .bind(data.name)
            .bind(data.bio)
            .bind(data.image_url)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(row.into())
    }

    async fn query(&mut self, election_id: i32) -> Result<Vec<Candidate>, Error> {
        let rows: Vec<CandidateRow> = query_as("SELECT * FROM candidates WHERE election_id = $1 ORDER BY votes_count DESC, id ASC")
            .bind(election_id)
            .fetch_all(&mut self.executor)
            .await?;
        Ok(rows.into_iter().map(Candidate::from).collect())
    }

    async fn get(&mut self, id: i32) -> Result<Candidate, Error> {
        let row: Option<CandidateRow> = query_as("SELECT * FROM candidates WHERE id = $1").bind(id).fetch_optional(&mut self.executor).await?;
        row.map(Candidate::from).ok_or_else(|| Error::NotFound("candidate".into()))
    }

    async fn increase_votes(&mut self, id: i32) -> Result<i32, Error> {
        let votes: Option<i32> = query_scalar("UPDATE candidates SET votes_count = votes_count + 1 WHERE id = $1 RETURNING votes_count")
            .bind(id)
            .fetch_optional(&mut self.executor)
            .await?;
        votes.ok_or_else(|| Error::NotFound("candidate".into()))
    }
}

#[derive(Debug, FromRow)]
struct BallotRow {
    id: i32,
    election_id: i32,
    candidate_id: i32,
    voter: String,
    created_at: DateTime<Utc>,
}

impl<E> BallotCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: BallotInsert) -> Result<i32, Error> {
        let id = query_scalar("INSERT INTO ballots (election_id, candidate_id, voter, created_at) VALUES ($1, $2, $3, $4) RETURNING id")
            .bind(data.election_id)
            .bind(data.candidate_id)
            .bind(data.voter)
            .bind(data.created_at)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(id)
    }

    async fn find(&mut self, election_id: i32, voter: &str) -> Result<Option<Ballot>, Error> {
        let row: Option<BallotRow> = query_as("SELECT * FROM ballots WHERE election_id = $1 AND voter = $2")
            .bind(election_id)
            .bind(voter)
            .fetch_optional(&mut self.executor)
            .await?;
        Ok(row.map(|r| Ballot {
            id: r.id,
            election_id: r.election_id,
            candidate_id: r.candidate_id,
            voter: r.voter,
            created_at: r.created_at,
        }))
    }
}
