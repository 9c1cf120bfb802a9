/// Marker trait for intents.
///
/// An intent is a tagged description of a state change: a button press in a
/// demo, or a system event such as a completed fetch.
pub trait Intent: Send + 'static {}
