//! Request middleware

mod identity;

pub use identity::{LEARNER_ID_HEADER, LearnerIdentity, identity_middleware};
