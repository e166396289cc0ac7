//! Sprout engine crate.
//!
//! Opens a fixed-size window and drives a user script plus an engine core
//! through load, input, update and draw hooks:
//!
//! ```rust,no_run
//! use sprout_engine::core::{EngineCore, HookScript};
//! use sprout_engine::surface::Color;
//! use sprout_engine::window::{Runtime, RuntimeConfig};
//!
//! let script = HookScript::new(0.0f32)
//!     .on_update(|t, dt| *t += dt)
//!     .on_draw(|t, surface| surface.fill_rect((*t * 60.0) as i32 % 1024, 380, 40, 40, Color::WHITE));
//!
//! Runtime::run(RuntimeConfig::default(), EngineCore::new(), script)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod core;
pub mod input;
pub mod time;
pub mod window;

pub mod logging;
pub mod surface;
