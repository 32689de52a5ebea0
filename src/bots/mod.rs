pub mod computer;
pub mod human;
pub mod registry;

pub use computer::{ComputerBot, computer_decision};
pub use human::{HumanBot, LineInput};
pub use registry::{build_players, create_bot};
