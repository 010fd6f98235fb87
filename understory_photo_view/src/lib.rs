// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_photo_view --heading-base-level=0

//! Understory Photo View: headless pan/zoom/drag control for a single image.
//!
//! This crate turns classified gesture input (drags, pinches, flings, taps)
//! into a 2D affine transform for an image shown inside a rectangular
//! viewport. It enforces scale limits and content bounds, hands touches back
//! to a parent container at scroll edges, and drives the animations a photo
//! viewer needs: double-tap zoom, fling, drag-release snap-back with
//! pull-down-to-dismiss, and size morphs between two presentations of the
//! same image.
//!
//! It does not render, decode images or recognize gestures. The host feeds
//! [`GestureEvent`]s and frame times in, and receives the draw matrix and
//! notifications through [`Handlers`].
//!
//! ## Transforms
//!
//! Two matrices coexist:
//!
//! - The **base** transform lays the image out inside the viewport according
//!   to a [`FitPolicy`]. It is recomputed when the image, viewport or policy
//!   changes.
//! - The **user** transform accumulates pan, zoom and rotation on top of it,
//!   and survives base recomputation.
//!
//! The draw matrix is `user * base`, derived on demand. Scales are user
//! scales: `1.0` means "as the fit policy lays it out".
//!
//! ## Usage
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size, Vec2};
//! use understory_photo_view::{GestureEvent, PhotoView, PhotoViewConfig, Viewport};
//!
//! let mut view = PhotoView::new(PhotoViewConfig::default());
//! view.handlers_mut().on_draw_matrix(|matrix| {
//!     // Hand `matrix` to the renderer.
//!     let _ = matrix;
//! });
//! view.set_viewport(Viewport::new(Size::new(1000.0, 1000.0)));
//! view.set_content(Some(Size::new(2000.0, 1000.0)));
//!
//! // Pinch to 2x around the center.
//! view.handle(GestureEvent::Down);
//! view.handle(GestureEvent::ScaleBegin);
//! view.handle(GestureEvent::Scale { factor: 2.0, focus: Point::new(500.0, 500.0) });
//! view.handle(GestureEvent::ScaleEnd);
//! view.handle(GestureEvent::Up);
//! assert!((view.scale() - 2.0).abs() < 1e-9);
//!
//! // Fling, then drive frames until it settles.
//! view.handle(GestureEvent::Fling {
//!     velocity: Vec2::new(-3000.0, 0.0),
//!     pointer_count: 1,
//!     pointer_still_down: false,
//! });
//! while view.tick(Duration::from_millis(16)) {}
//! let shown = view.display_rect().unwrap();
//! assert!(shown.x1 >= 1000.0 - 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`], [`fit`], [`bounds`]: pure matrix and layout math.
//! - [`transform`]: base and user transforms for one image.
//! - [`dismiss`]: pull-down-to-dismiss tracking.
//! - [`animation`]: frame-stepped zoom, fling, snap-back and morph tasks.
//! - [`PhotoView`]: the controller tying it together.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std` and `thiserror/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` float math.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod bounds;
pub mod dismiss;
pub mod fit;
pub mod geometry;
pub mod transform;

mod config;
mod controller;
mod error;
mod gesture;
mod handlers;
mod limits;
mod viewport;

pub use animation::{Interpolator, MorphContext, MorphFrame};
pub use bounds::EdgeState;
pub use config::{
    DEFAULT_MORPH_DURATION, DEFAULT_SNAP_BACK_DURATION, DEFAULT_ZOOM_DURATION, PhotoViewConfig,
};
pub use controller::PhotoView;
pub use error::{Error, Result};
pub use fit::FitPolicy;
pub use gesture::{GestureEvent, GesturePhase};
pub use handlers::{Handlers, Slot};
pub use limits::{
    DEFAULT_MAX_SCALE, DEFAULT_MID_SCALE, DEFAULT_MIN_SCALE, SCALE_TOLERANCE, ScaleLimits,
};
pub use transform::ScaleOutcome;
pub use viewport::Viewport;
