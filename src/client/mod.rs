//! Client Layer
//!
//! Data access against the remote API. The gateway owns the HTTP plumbing,
//! the operation modules put typed signatures on top, and [`ItemStore`] is
//! the seam consumers program against.

mod gateway;
mod images;
mod items;
mod traits;


pub use gateway::ApiClient;
pub use images::MAX_IMAGE_BYTES;
pub use items::ListQuery;
pub use traits::ItemStore;
