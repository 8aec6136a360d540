use crate::commands::{CmdMessage, CmdResult};

pub const HEALTH_MESSAGE: &str = "MCP Word Service is up and running!";

pub fn run() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::success(HEALTH_MESSAGE))
}
