//! Browser port - opens a URL for the user

use crate::error::ChecksResult;

pub trait Browser {
    fn browse(&self, url: &str) -> ChecksResult<()>;
}
