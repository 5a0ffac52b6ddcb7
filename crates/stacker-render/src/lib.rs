//! Rendering for Stacker.
//!
//! Boxes are rasterized on the CPU into a [`Framebuffer`] with an
//! orthographic camera and Lambert lighting, then handed to a
//! [`Presenter`]. [`WindowPresenter`] copies the frame into a winit window
//! through `softbuffer`.
//!
//! # Core Types
//!
//! - [`RenderGateway`]: physics gateway that also draws every frame
//! - [`SceneRenderer`]: draws [`DrawBox`]es with lighting
//! - [`Framebuffer`]: color and depth buffers with triangle filling
//!
//! # Usage
//!
//! ```ignore
//! let presenter = WindowPresenter::new(window.clone())?;
//! let gateway = RenderGateway::new(RapierGateway::default(), presenter, width, height);
//! let session = Session::new(config, gateway, hud)?;
//! ```

mod error;
mod gateway;
mod presenter;
mod raster;
mod scene;

pub use error::{RenderError, Result};
pub use gateway::RenderGateway;
pub use presenter::{Presenter, WindowPresenter};
pub use raster::{pack_rgb, Framebuffer};
pub use scene::{DrawBox, Lighting, SceneRenderer, BACKGROUND};
