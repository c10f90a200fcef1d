//! Result type alias for the queue notifier

use super::errors::QueueError;

/// Result type alias for queue notifier operations
///
/// # Examples
///
/// ```
/// use queue_notifier::domain::result::Result;
/// use queue_notifier::domain::errors::QueueError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(QueueError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, QueueError>;
