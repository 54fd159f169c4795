//! Core types and traits for the Segmenta widget toolkit.
//!
//! This crate provides foundational types used throughout Segmenta:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] and [`Canvas`] traits, plus [`RecordingCanvas`]
//! - The markup tree widgets render into: [`Node`], [`Element`], [`NodeRef`]
//! - Easing and tweens: [`Easing`], [`EasedValue`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod markup;
pub mod widget;

pub use animation::{EasedValue, Easing};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand};
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use markup::{Element, Node, NodeRef};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};
