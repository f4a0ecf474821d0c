//! Roster identity accessors.
//!
//! The export projector only needs a member's login name and institutional id. Both come from
//! the roster entity itself; the external id lookup may fail and is absorbed by the caller.

use crate::error::MarkerError;
use crate::types::Member;

pub trait Identity {
    fn username(&self) -> &str;
    fn external_id(&self) -> Result<String, MarkerError>;
}

impl Identity for Member {
    fn username(&self) -> &str {
        Member::username(self)
    }

    fn external_id(&self) -> Result<String, MarkerError> {
        Member::external_id(self)
    }
}
