pub mod session_replay;
pub mod text_renderer;
