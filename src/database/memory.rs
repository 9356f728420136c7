use std::sync::{Arc, Mutex};

use crate::core::models::{
    blog::{BlogPost, Insert as BlogPostInsert, Query as BlogPostQuery},
    common::Pagination,
    election::{Ballot, BallotInsert, Candidate, CandidateInsert, Election, Insert as ElectionInsert},
    experience::{Experience, Insert as ExperienceInsert, Query as ExperienceQuery},
    notice::{Insert as NoticeInsert, Notice, Query as NoticeQuery},
    testimonial::{Insert as TestimonialInsert, Testimonial},
};
use crate::core::ports::repository::{
    BallotCommon, BlogPostCommon, CandidateCommon, Common, ElectionCommon, ExperienceCommon, Manager, NoticeCommon, Store, TestimonialCommon, TxStore,
};
use crate::error::Error;

#[derive(Debug, Default, Clone)]
struct State {
    seq: i32,
    experiences: Vec<Experience>,
    testimonials: Vec<Testimonial>,
    notices: Vec<Notice>,
    posts: Vec<BlogPost>,
    elections: Vec<Election>,
    candidates: Vec<Candidate>,
    ballots: Vec<Ballot>,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.seq += 1;
        self.seq
    }
}

fn page<T>(items: Vec<T>, pagination: Option<Pagination>) -> Vec<T> {
    match pagination {
        Some(p) => items.into_iter().skip(p.offset() as usize).take(p.limit() as usize).collect(),
        None => items,
    }
}

/// Keeps every collection in process memory; a transaction works on a copy that
/// replaces the shared state on commit.
#[derive(Debug, Clone, Default)]
pub struct MemoryManager {
    state: Arc<Mutex<State>>,
}

impl MemoryManager {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct MemoryStore {
    shared: Arc<Mutex<State>>,
    pending: Option<State>,
}

impl MemoryStore {
    fn with<R>(&mut self, f: impl FnOnce(&mut State) -> R) -> R {
        match &mut self.pending {
            Some(state) => f(state),
            None => f(&mut self.shared.lock().unwrap()),
        }
    }
}

impl Manager for MemoryManager {
    type Store = MemoryStore;
    type TxStore = MemoryStore;

    async fn db(&self) -> Result<MemoryStore, Error> {
        Ok(MemoryStore {
            shared: self.state.clone(),
            pending: None,
        })
    }

    async fn tx(&self) -> Result<MemoryStore, Error> {
        let pending = self.state.lock().unwrap().clone();
        Ok(MemoryStore {
            shared: self.state.clone(),
            pending: Some(pending),
        })
    }
}

impl Common for MemoryStore {}

impl Store for MemoryStore {}

impl TxStore for MemoryStore {
    async fn commit(mut self) -> Result<(), Error> {
        if let Some(state) = self.pending.take() {
            *self.shared.lock().unwrap() = state;
        }
        Ok(())
    }

    async fn rollback(mut self) -> Result<(), Error> {
        self.pending = None;
        Ok(())
    }
}

impl ExperienceCommon for MemoryStore {
    async fn insert(&mut self, data: ExperienceInsert) -> Result<Experience, Error> {
        Ok(self.with(|s| {
            let exp = Experience {
                id: s.next_id(),
                name: data.name,
                email: data.email,
                university: data.university,
                consulate: data.consulate,
                major: data.major,
                interview_date: data.interview_date,
                approved: data.approved,
                status_label: data.approved.label(),
                experience: data.experience,
                created_at: data.created_at,
            };
            s.experiences.push(exp.clone());
            exp
        }))
    }

    async fn query(&mut self, query: &ExperienceQuery, pagination: Option<Pagination>) -> Result<Vec<Experience>, Error> {
        let mut found: Vec<Experience> = self.with(|s| s.experiences.iter().filter(|e| query.matches(e)).cloned().collect());
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(page(found, pagination))
    }

    async fn count(&mut self, query: &ExperienceQuery) -> Result<i64, Error> {
        Ok(self.with(|s| s.experiences.iter().filter(|e| query.matches(e)).count() as i64))
    }

    async fn get(&mut self, id: i32) -> Result<Experience, Error> {
        self.with(|s| s.experiences.iter().find(|e| e.id == id).cloned())
            .ok_or_else(|| Error::NotFound("experience".into()))
    }

    async fn same_consulate(&mut self, consulate: &str, exclude: i32, limit: i64) -> Result<Vec<Experience>, Error> {
        let mut found: Vec<Experience> = self.with(|s| s.experiences.iter().filter(|e| e.consulate == consulate && e.id != exclude).cloned().collect());
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        Ok(self.with(|s| {
            let before = s.experiences.len();
            s.experiences.retain(|e| e.id != id);
            (before - s.experiences.len()) as u64
        }))
    }
}

impl TestimonialCommon for MemoryStore {
    async fn insert(&mut self, data: TestimonialInsert) -> Result<Testimonial, Error> {
        Ok(self.with(|s| {
            let t = Testimonial {
                id: s.next_id(),
                name: data.name,
                email: data.email,
                university: data.university,
                role: data.role,
                quote: data.quote,
                photo_url: data.photo_url,
                created_at: data.created_at,
            };
            s.testimonials.push(t.clone());
            t
        }))
    }

    async fn query(&mut self, pagination: Option<Pagination>) -> Result<Vec<Testimonial>, Error> {
        let mut found = self.with(|s| s.testimonials.clone());
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(page(found, pagination))
    }

    async fn count(&mut self) -> Result<i64, Error> {
        Ok(self.with(|s| s.testimonials.len() as i64))
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        Ok(self.with(|s| {
            let before = s.testimonials.len();
            s.testimonials.retain(|t| t.id != id);
            (before - s.testimonials.len()) as u64
        }))
    }
}

impl NoticeCommon for MemoryStore {
    async fn insert(&mut self, data: NoticeInsert) -> Result<Notice, Error> {
        self.with(|s| {
            if s.notices.iter().any(|n| n.slug == data.slug) {
                return Err(Error::Conflict(format!("slug {} already exists", data.slug)));
            }
            let notice = Notice {
                id: s.next_id(),
                title: data.title,
                slug: data.slug,
                content: data.content,
                image_url: data.image_url,
                is_emergency: data.is_emergency,
                is_active: data.is_active,
                created_at: data.created_at,
            };
            s.notices.push(notice.clone());
            Ok(notice)
        })
    }

    async fn query(&mut self, query: &NoticeQuery, pagination: Option<Pagination>) -> Result<Vec<Notice>, Error> {
        let mut found: Vec<Notice> = self.with(|s| s.notices.iter().filter(|n| query.matches(n)).cloned().collect());
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(page(found, pagination))
    }

    async fn get_by_slug(&mut self, slug: &str) -> Result<Notice, Error> {
        self.with(|s| s.notices.iter().find(|n| n.slug == slug).cloned())
            .ok_or_else(|| Error::NotFound("notice".into()))
    }

    async fn slug_exists(&mut self, slug: &str) -> Result<bool, Error> {
        Ok(self.with(|s| s.notices.iter().any(|n| n.slug == slug)))
    }

    async fn set_active(&mut self, id: i32, active: bool) -> Result<Notice, Error> {
        self.with(|s| {
            let notice = s.notices.iter_mut().find(|n| n.id == id).ok_or_else(|| Error::NotFound("notice".into()))?;
            notice.is_active = active;
            Ok(notice.clone())
        })
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        Ok(self.with(|s| {
            let before = s.notices.len();
            s.notices.retain(|n| n.id != id);
            (before - s.notices.len()) as u64
        }))
    }
}

impl BlogPostCommon for MemoryStore {
    async fn insert(&mut self, data: BlogPostInsert) -> Result<BlogPost, Error> {
        self.with(|s| {
            if s.posts.iter().any(|p| p.slug == data.slug) {
                return Err(Error::Conflict(format!("slug {} already exists", data.slug)));
            }
            let post = BlogPost {
                id: s.next_id(),
                title: data.title,
                slug: data.slug,
                content: data.content,
                author: data.author,
                author_avatar_url: data.author_avatar_url,
                tags: data.tags,
                likes: 0,
                views: 0,
                created_at: data.created_at,
            };
            s.posts.push(post.clone());
            Ok(post)
        })
    }

    async fn query(&mut self, query: &BlogPostQuery, pagination: Option<Pagination>) -> Result<Vec<BlogPost>, Error> {
        let mut found: Vec<BlogPost> = self.with(|s| s.posts.iter().filter(|p| query.matches(p)).cloned().collect());
        found.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(page(found, pagination))
    }

    async fn count(&mut self, query: &BlogPostQuery) -> Result<i64, Error> {
        Ok(self.with(|s| s.posts.iter().filter(|p| query.matches(p)).count() as i64))
    }

    async fn get_by_slug(&mut self, slug: &str) -> Result<BlogPost, Error> {
        self.with(|s| s.posts.iter().find(|p| p.slug == slug).cloned())
            .ok_or_else(|| Error::NotFound("blog post".into()))
    }

    async fn slug_exists(&mut self, slug: &str) -> Result<bool, Error> {
        Ok(self.with(|s| s.posts.iter().any(|p| p.slug == slug)))
    }

    async fn increase_views(&mut self, id: i32) -> Result<i32, Error> {
        self.with(|s| {
            let post = s.posts.iter_mut().find(|p| p.id == id).ok_or_else(|| Error::NotFound("blog post".into()))?;
            post.views += 1;
            Ok(post.views)
        })
    }

    async fn increase_likes(&mut self, slug: &str) -> Result<i32, Error> {
        self.with(|s| {
            let post = s.posts.iter_mut().find(|p| p.slug == slug).ok_or_else(|| Error::NotFound("blog post".into()))?;
            post.likes += 1;
            Ok(post.likes)
        })
    }

    async fn delete(&mut self, id: i32) -> Result<u64, Error> {
        Ok(self.with(|s| {
            let before = s.posts.len();
            s.posts.retain(|p| p.id != id);
            (before - s.posts.len()) as u64
        }))
    }
}

impl ElectionCommon for MemoryStore {
    async fn insert(&mut self, data: ElectionInsert) -> Result<Election, Error> {
        Ok(self.with(|s| {
            let election = Election {
                id: s.next_id(),
                title: data.title,
                description: data.description,
                start_date: data.start_date,
                end_date: data.end_date,
                created_at: data.created_at,
            };
            s.elections.push(election.clone());
            election
        }))
    }

    async fn query(&mut self) -> Result<Vec<Election>, Error> {
        let mut found = self.with(|s| s.elections.clone());
        found.sort_by(|a, b| (b.start_date, b.id).cmp(&(a.start_date, a.id)));
        Ok(found)
    }

    async fn get(&mut self, id: i32) -> Result<Election, Error> {
        self.with(|s| s.elections.iter().find(|e| e.id == id).cloned())
            .ok_or_else(|| Error::NotFound("election".into()))
    }
}

impl CandidateCommon for MemoryStore {
    async fn insert(&mut self, data: CandidateInsert) -> Result<Candidate, Error> {
        Ok(self.with(|s| {
            let candidate = Candidate {
                id: s.next_id(),
                election_id: data.election_id,
                name: data.name,
                bio: data.bio,
                image_url: data.image_url,
                votes_count: 0,
            };
            s.candidates.push(candidate.clone());
            candidate
        }))
    }

    async fn query(&mut self, election_id: i32) -> Result<Vec<Candidate>, Error> {
        let mut found: Vec<Candidate> = self.with(|s| s.candidates.iter().filter(|c| c.election_id == election_id).cloned().collect());
        found.sort_by(|a, b| b.votes_count.cmp(&a.votes_count).then(a.id.cmp(&b.id)));
        Ok(found)
    }

    async fn get(&mut self, id: i32) -> Result<Candidate, Error> {
        self.with(|s| s.candidates.iter().find(|c| c.id == id).cloned())
            .ok_or_else(|| Error::NotFound("candidate".into()))
    }

    async fn increase_votes(&mut self, id: i32) -> Result<i32, Error> {
        self.with(|s| {
            let candidate = s.candidates.iter_mut().find(|c| c.id == id).ok_or_else(|| Error::NotFound("candidate".into()))?;
            candidate.votes_count += 1;
            Ok(candidate.votes_count)
        })
    }
}

impl BallotCommon for MemoryStore {
    async fn insert(&mut self, data: BallotInsert) -> Result<i32, Error> {
        self.with(|s| {
            if s.ballots.iter().any(|b| b.election_id == data.election_id && b.voter == data.voter) {
                return Err(Error::Conflict("ballot already cast".into()));
            }
            let id = s.next_id();
            s.ballots.push(Ballot {
                id,
                election_id: data.election_id,
                candidate_id: data.candidate_id,
                voter: data.voter,
                created_at: data.created_at,
            });
            Ok(id)
        })
    }

    async fn find(&mut self, election_id: i32, voter: &str) -> Result<Option<Ballot>, Error> {
        Ok(self.with(|s| s.ballots.iter().find(|b| b.election_id == election_id && b.voter == voter).cloned()))
    }
}
