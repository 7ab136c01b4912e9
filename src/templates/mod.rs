pub mod root_agent;

pub use root_agent::{ROOT_AGENT_INSTR, ROOT_AGENT_INSTR_V1, ROOT_AGENT_INSTR_V2};
