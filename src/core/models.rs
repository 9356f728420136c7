pub mod blog;
pub mod common;
pub mod election;
pub mod experience;
pub mod notice;
pub mod testimonial;

pub use blog::{BlogPost, BlogPostCreate, BlogPostView};
pub use common::Slide;
pub use election::{BallotCast, BallotStatus, CandidateCreate, ElectionCreate, ElectionDetail, ElectionView, VoteReceipt};
pub use experience::{Experience, ExperienceDetail, ExperienceSubmit};
pub use notice::{Notice, NoticeCreate};
pub use testimonial::{Testimonial, TestimonialSubmit};
