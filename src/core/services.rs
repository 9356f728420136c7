pub mod blog;
pub mod election;
pub mod experience;
pub mod notice;
pub mod testimonial;
