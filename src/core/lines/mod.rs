pub mod implementations;
pub mod queue;
pub mod traits;

// Re-export commonly used types
pub use implementations::{ExpressLine, RegularLine, SelfServeLine, EXPRESS_LIMIT};
pub use queue::LineQueue;
pub use traits::{CheckoutLine, LineKind};
