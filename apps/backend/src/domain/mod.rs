//! Domain snapshots and input DTOs exchanged with the routing layer.
//!
//! Everything here is plain structured data: no adapter state, no
//! connection handles. Inputs are assumed to be validated at the boundary;
//! invariants that span entities live in `crate::services`.

pub mod account;
pub mod application;
pub mod chat;
pub mod job;
pub mod post;

pub use account::{Account, AccountCreate, AccountUpdate};
pub use application::{Application, ApplicationCreate, ApplicationStatus, ApplicationUpdate};
pub use chat::{Chat, ChatCreate, ChatUpdate, LastMessage, Message, MessageCreate};
pub use job::{Job, JobCreate, JobFilter, JobStatus, JobUpdate};
pub use post::{Post, PostCreate};
