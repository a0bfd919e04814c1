pub mod command;
pub mod engine;
pub mod store;

pub use command::CommandInterface;
pub use engine::EngineHandle;
pub use store::PositionStore;
