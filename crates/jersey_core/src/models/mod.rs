pub mod assignment;
pub mod jersey;
pub mod player;
pub mod size;
pub mod snapshot;
pub mod submission;

pub use assignment::{Assignment, AssignmentMethod};
pub use jersey::JerseyInventory;
pub use player::{Player, VALID_GRADES};
pub use size::{parse_size_list, JerseySize};
pub use snapshot::RosterSnapshot;
pub use submission::{ChoiceRank, Submission};
