//! Game balance constants.

/// Power points a new player starts with
pub const STARTING_POWER: u32 = 100;

/// Power debited for every successful move
pub const MOVE_COST: u32 = 3;

/// Power lost to a trap with no tool to disable it
pub const TRAP_PENALTY: u32 = 7;

/// Power lost for a wrong riddle answer
pub const RIDDLE_PENALTY: u32 = 8;

/// Power lost when the Lost Explorer wins the fight
pub const EXPLORER_PENALTY: u32 = 5;

/// Fighting the Lost Explorer is won iff power is strictly above this
pub const FIGHT_POWER_THRESHOLD: u32 = 70;

/// Items granted for beating the Lost Explorer
pub const EXPLORER_REWARD_COUNT: usize = 3;

/// Power restored by eating a Cake
pub const CAKE_RESTORE: u32 = 3;

/// Power restored by eating a Sandwich
pub const SANDWICH_RESTORE: u32 = 5;

/// Power swing of the Sleeping / Health potions
pub const POTION_POWER: u32 = 5;

/// Rejection-sampling budget for encounter placement (exceeding is fatal)
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// Rejection-sampling budget for teleportation (exceeding fizzles the spell)
pub const TELEPORT_ATTEMPTS: u32 = 100;

/// Most items a single look-around can turn up
pub const LOOK_MAX_FINDS: u32 = 2;
