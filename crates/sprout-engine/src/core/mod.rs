//! Hook contracts and dispatch.
//!
//! `Script` is the user's game, `Core` the engine collaborator that runs
//! after it. `HookHost` owns both, probes the script once, and routes
//! events, updates and draws in script-then-core order. The runtime in
//! `window` feeds it; nothing here touches the window system.

mod app;
mod engine;
mod event;
mod host;
mod script;

pub use app::{AppControl, Capabilities, Core, Script};
pub use engine::{EngineCore, OVERLAY_KEY};
pub use event::{Event, KeyPress, MouseClick};
pub use host::HookHost;
pub use script::HookScript;
