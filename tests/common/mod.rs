// Common test utilities and fixtures


// Re-export commonly used items
// Note: Not every test crate uses every helper
#[allow(unused_imports)]
pub use fixtures::{FULL_LOOKUP_BODY, GOOGLE_GEO_BODY, LITE_BODY};
#[allow(unused_imports)]
pub use helpers::{create_test_services, StubProvider, StubReply};
