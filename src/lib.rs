//! Named, immutable instruction templates for the travel concierge agent.
//!
//! ```
//! let instructions = concierge_prompts::get("ROOT_AGENT_INSTR").unwrap();
//! assert!(instructions.contains("travel concierge"));
//! ```

pub mod registry;
pub mod templates;
pub mod utils;

pub use registry::{get, PromptRegistry, RegistryError, Template};
