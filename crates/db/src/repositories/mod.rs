//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod candidate_note_repo;
pub mod candidate_rating_repo;
pub mod job_repo;
pub mod job_template_repo;

pub use application_repo::ApplicationRepo;
pub use candidate_note_repo::CandidateNoteRepo;
pub use candidate_rating_repo::CandidateRatingRepo;
pub use job_repo::JobRepo;
pub use job_template_repo::JobTemplateRepo;
