use crate::error::LookupError;

mod request;

pub use request::RequestFetcher;

/// Retrieves the raw HTML for one page.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, LookupError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String, LookupError> {
        (**self).fetch(url)
    }
}
