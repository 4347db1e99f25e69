//! Error handling for credkeep.
//!
//! - **Error Categories**: classification used to decide between "log in
//!   again" and "fix the environment"
//! - **Store Errors**: `StoreError`, returned by every fallible store operation
//! - **System Errors**: classified filesystem failures wrapped by `StoreError`
//!
//! | Category | Variants | Recoverable by login |
//! |----------|----------|----------------------|
//! | Auth | NoStoredSession, IncompleteSession | Yes |
//! | Storage | CorruptedStore | Yes |
//! | System | StorageWriteFailed, DirectoryCreationFailed | No |
//! | Configuration | NoHomeDirectory | No |

mod category;
mod store;
mod system;

pub use category::ErrorCategory;
pub use store::{StoreError, StoreResult};
pub use system::{classify_io_error, SystemError};
