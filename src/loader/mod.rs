//! Avatar loader: fetch and decode off the UI thread
//!
//! - `fetch`: the `Fetch` capability and its reqwest-backed implementation
//! - `decode`: bytes to RGBA conversion
//! - `main_loop`: loader thread that runs one task per session
//! - `handle`: UI-side sender used by rows to start sessions
mod decode;
mod fetch;
mod handle;
mod main_loop;

pub use decode::{decode_image, DecodedImage, MAX_AVATAR_DIMENSION};
pub use fetch::{Fetch, HttpFetcher};
pub use handle::LoaderHandle;
pub use main_loop::{load, run_loader};

#[cfg(test)]
pub(crate) use decode::encode_test_png;
