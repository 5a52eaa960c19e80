pub mod errors;
pub mod extract;
pub mod model;
pub mod ports;
pub mod window;

pub use errors::CaptureError;
pub use extract::{mockify, ExtractPolicy};
pub use model::{BoundingRect, DomNode};
pub use ports::{Renderer, StaticRenderer};
pub use window::{Viewport, WindowHandle};
