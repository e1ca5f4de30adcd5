//! System-wide pointer interception.
//!
//! - `context.rs`: state read by the tap callback and the callback body itself
//! - `hook.rs`: the `EventTap` backend trait and the install/remove lifecycle
//!
//! ```text
//! OS event ──▶ EventTap backend ──▶ TapContext::handle ──▶ policy::decide
//!                    ▲                     │
//!                    └──── TapVerdict ◀────┘
//! ```

pub mod context;
pub mod hook;

pub use context::{SuspendReason, TapContext, TapEvent, TapVerdict};
pub use hook::{EventInterceptor, EventTap, HookState};
