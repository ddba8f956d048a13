pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::GameAction;
pub use executor::execute_queued_actions;
pub use plugin::GameActionsPlugin;
pub use queue::{ActionQueue, QueuedAction};
pub use result_log::ActionResultLog;
pub use results::{ActionError, ActionResult};
