//! Page components for doccards.

mod doc_page;
mod home;

pub use doc_page::DocPage;
pub use home::Home;
