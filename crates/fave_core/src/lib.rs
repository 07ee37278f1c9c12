//! Fave Core
//!
//! Foundational primitives shared by the fave crates:
//!
//! - **State Machines**: small typed transition tables with history
//! - **Events**: input events delivered to widgets by the host
//! - **Errors**: configuration errors raised at the widget boundary
//!
//! # Example
//!
//! ```rust
//! use fave_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Light { Off, On }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Switch { Flip }
//!
//! let mut fsm = StateMachine::builder(Light::Off)
//!     .on(Light::Off, Switch::Flip, Light::On)
//!     .on(Light::On, Switch::Flip, Light::Off)
//!     .build();
//!
//! assert_eq!(fsm.send(Switch::Flip), Some(Light::On));
//! assert!(fsm.is_in(Light::On));
//! ```

pub mod error;
pub mod events;
pub mod fsm;

pub use error::{ConfigError, Result};
pub use events::{Event, EventData, EventType, KeyCode, WidgetId};
pub use fsm::{StateMachine, StateMachineBuilder};
