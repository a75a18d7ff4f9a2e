//! Shared job-board types and the pure logic behind the page:
//! reading filter state from the URL, toggling type tags, and
//! deriving the labels shown on each job card.

pub mod card;
pub mod filter;
pub mod job;

pub use filter::FilterState;
pub use job::{Job, JobType};
