//! Form presentation: field labels, submission collection, and the HTML page.

pub mod form;
pub mod html;
pub mod page;

pub use form::{collect_submission, field_label, parse_assignment};
pub use html::render_html_page;
pub use page::build_page_data;
