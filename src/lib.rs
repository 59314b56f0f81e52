//! # paintstamp
//!
//! An interactive stamp drawing canvas on top of wgpu. Squares, triangles and circles are stamped
//! along the pointer path while a button is held; a fixed picture made of literal triangles can be
//! shown instead of the user's drawing.
//!
//! The pieces fit together like this:
//!
//! * [`Session`] owns the [`Scene`] (every placed shape, in paint order), the current tool
//!   selection and the drag state machine. Pointer events and UI control changes go to it.
//! * [`generate`] turns each [`ShapeDescriptor`] into vertices for the current canvas size.
//! * A [`DrawTarget`] rasterizes the vertices. [`Renderer`] is the wgpu implementation, drawing
//!   every shape with its own draw call onto a canvas texture that is copied to the window on
//!   [`Renderer::present`].
//!
//! # Examples
//!
//! ```rust
//! use paintstamp::{PointerButtons, PointerEvent, Session, SessionConfig, Tool};
//!
//! let mut session = Session::new(SessionConfig::default().with_tool(Tool::Circle), (400, 400));
//!
//! session.on_pointer(&PointerEvent::down(200.0, 200.0));
//! session.on_pointer(&PointerEvent::moved(200.0, 180.0, PointerButtons::PRIMARY));
//! session.on_pointer(&PointerEvent::up(200.0, 180.0));
//!
//! // One stamp for the press, five more along the 0.1 unit drag
//! assert_eq!(session.scene().len(), 6);
//! ```

pub use wgpu;

mod color;
mod error;
mod geometry;
mod input;
pub mod logging;
mod picture;
mod pipeline;
mod renderer;
mod scene;
mod session;
mod target;
mod vertex;

pub use color::Color;
pub use error::RendererError;
pub use geometry::{generate, half_extents, Geometry, ShapeDescriptor, ShapeKind, Topology, MIN_SEGMENTS};
pub use input::{
    pixel_to_ndc, stroke_points, DragState, InputState, PointerButtons, PointerEvent,
    PointerEventKind, Tool, DEFAULT_COLOR, DEFAULT_SEGMENTS, DEFAULT_SIZE, DEFAULT_STROKE_STEP,
    MIN_STROKE_STEP,
};
pub use picture::{draw_fixed_picture, PictureTriangle, COCKATIEL};
pub use renderer::{Renderer, RendererConfig};
pub use scene::Scene;
pub use session::{Session, SessionConfig, View, MIN_SIZE};
pub use target::DrawTarget;
pub use vertex::Vertex;
