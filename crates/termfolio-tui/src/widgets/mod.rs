//! Custom widget components

mod frame_view;

pub use frame_view::FrameView;
