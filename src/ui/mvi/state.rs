/// Marker trait for demo state.
///
/// `Default` is the freshly mounted state; `App` takes the old value out with
/// `std::mem::take` before handing it to the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
