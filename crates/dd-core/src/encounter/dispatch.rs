//! Encounter resolution.
//!
//! Each kind builds a numbered option menu from what the player is
//! carrying and resolves a 1-indexed selection into consequences. An
//! out-of-range or non-numeric selection is not re-prompted: it falls
//! through to the encounter's worst branch, so hesitating in front of the
//! Guardian is lethal.

use crate::consts::{
    EXPLORER_PENALTY, EXPLORER_REWARD_COUNT, FIGHT_POWER_THRESHOLD, RIDDLE_PENALTY, TRAP_PENALTY,
};
use crate::encounter::EncounterKind;
use crate::encounter::content::{RIDDLES, SCIENCE_OPENERS};
use crate::gameloop::{GameLoopResult, GameState, Pending};
use crate::player::{InventoryState, Item};

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-indexed menu entry
    Choice(usize),
    /// Non-numeric input
    Invalid,
}

impl Selection {
    pub fn parse(input: &str) -> Selection {
        input
            .trim()
            .parse()
            .map(Selection::Choice)
            .unwrap_or(Selection::Invalid)
    }

    /// Resolve against a menu, `None` when nothing legitimate was picked.
    pub fn pick<T: Copy>(self, options: &[T]) -> Option<T> {
        match self {
            Selection::Choice(n) if n >= 1 => options.get(n - 1).copied(),
            _ => None,
        }
    }
}

/// One entry in an encounter's option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOption {
    UseHammer,
    UseFreezeSpell,
    UseHammerAndFreeze,
    UseTeleport,
    UseRelic,
    SolveRiddle,
    Fight,
    DoNothing,
}

impl EncounterOption {
    pub fn label(self) -> &'static str {
        match self {
            EncounterOption::UseHammer => "Use Hammer",
            EncounterOption::UseFreezeSpell => "Use Freeze Spell",
            EncounterOption::UseHammerAndFreeze => {
                "Use Hammer and Freeze Spell to subdue the Explorer"
            }
            EncounterOption::UseTeleport => "Use Teleportation Spell",
            EncounterOption::UseRelic => "Use the Relic to destroy The Guardian",
            EncounterOption::SolveRiddle => "Solve the riddle",
            EncounterOption::Fight => "Fight the Lost Explorer",
            EncounterOption::DoNothing => "Do nothing",
        }
    }
}

/// The menu an encounter offers given the player's inventory.
pub fn options_for(kind: EncounterKind, inventory: &InventoryState) -> Vec<EncounterOption> {
    let mut options = Vec::new();
    match kind {
        EncounterKind::Trap => {
            if inventory.contains(Item::Hammer) {
                options.push(EncounterOption::UseHammer);
            }
            if inventory.contains(Item::FreezeSpell) {
                options.push(EncounterOption::UseFreezeSpell);
            }
            options.push(EncounterOption::DoNothing);
        }
        EncounterKind::MadScientist => {
            if inventory.contains(Item::FreezeSpell) {
                options.push(EncounterOption::UseFreezeSpell);
            }
            options.push(EncounterOption::SolveRiddle);
        }
        EncounterKind::LostExplorer => {
            if inventory.contains(Item::Hammer) && inventory.contains(Item::FreezeSpell) {
                options.push(EncounterOption::UseHammerAndFreeze);
            }
            if inventory.contains(Item::TeleportationSpell) {
                options.push(EncounterOption::UseTeleport);
            }
            options.push(EncounterOption::Fight);
        }
        EncounterKind::Guardian => {
            if inventory.contains(Item::Relic) {
                options.push(EncounterOption::UseRelic);
            }
            if inventory.contains(Item::TeleportationSpell) {
                options.push(EncounterOption::UseTeleport);
            }
        }
    }
    options
}

/// Fire an encounter the player just stepped into. Either resolves it on
/// the spot (no meaningful choices) or parks a menu in `Pending`.
pub(crate) fn begin(state: &mut GameState, kind: EncounterKind) -> GameLoopResult {
    state.encounters_mut().mark_triggered(kind);
    let options = options_for(kind, &state.player.inventory);

    match kind {
        EncounterKind::Trap => {
            // Only "do nothing" available: spring it immediately
            if options.len() == 1 {
                return trap_springs(state);
            }
            state.message("Oh no! You've triggered a trap! But you have tools to escape it.");
            state.set_pending(Pending::Encounter { kind, options });
            GameLoopResult::Continue
        }
        EncounterKind::MadScientist => {
            let opener = SCIENCE_OPENERS[state.rng.index(SCIENCE_OPENERS.len())];
            state.message(opener);
            if options.len() == 1 {
                return pose_riddle(state);
            }
            state.message("The Mad Scientist blocks your way, but you have a Freeze Spell.");
            state.set_pending(Pending::Encounter { kind, options });
            GameLoopResult::Continue
        }
        EncounterKind::LostExplorer => {
            state.message("You encounter a desperate explorer...");
            state.message("The Lost Explorer stares at you, desperate and threatening.");
            state.set_pending(Pending::Encounter { kind, options });
            GameLoopResult::Continue
        }
        EncounterKind::Guardian => {
            state.message(
                "You stand before The Guardian, a towering sentinel protecting the dungeon's deepest secrets...",
            );
            if options.is_empty() {
                state.message("You have no means to overcome or escape The Guardian.");
                return guardian_slays(state);
            }
            state.set_pending(Pending::Encounter { kind, options });
            GameLoopResult::Continue
        }
    }
}

/// Resolve a menu selection. `option` is `None` when the player picked
/// nothing legitimate; every kind maps that to its worst branch.
pub(crate) fn resolve(
    state: &mut GameState,
    kind: EncounterKind,
    option: Option<EncounterOption>,
) -> GameLoopResult {
    match kind {
        EncounterKind::Trap => match option {
            Some(EncounterOption::UseHammer) => {
                state.player.inventory.remove(Item::Hammer);
                state.message("You used a Hammer to disable the trap! You're free to move now.");
                GameLoopResult::Continue
            }
            Some(EncounterOption::UseFreezeSpell) => {
                state.player.inventory.remove(Item::FreezeSpell);
                state.message(
                    "You cast the Freeze Spell! The trap has been neutralized. You're free to move now.",
                );
                GameLoopResult::Continue
            }
            _ => trap_springs(state),
        },
        EncounterKind::MadScientist => match option {
            Some(EncounterOption::UseFreezeSpell) => {
                state.player.inventory.remove(Item::FreezeSpell);
                state.message(
                    "You cast the Freeze Spell! The Mad Scientist is frozen. You're free to move again!",
                );
                GameLoopResult::Continue
            }
            _ => pose_riddle(state),
        },
        EncounterKind::LostExplorer => match option {
            Some(EncounterOption::UseHammerAndFreeze) => {
                state.player.inventory.remove(Item::FreezeSpell);
                state.player.inventory.remove(Item::Hammer);
                state.message(
                    "You use the Hammer and Freeze Spell to overwhelm the Lost Explorer without a fight!",
                );
                explorer_win(state);
                GameLoopResult::Continue
            }
            Some(EncounterOption::UseTeleport) => {
                state.player.inventory.remove(Item::TeleportationSpell);
                state.message("You use the Teleportation Spell to escape the Lost Explorer!");
                GameLoopResult::Continue
            }
            Some(EncounterOption::Fight) => fight_explorer(state),
            _ => {
                state.message("You hesitate and the Explorer attacks!");
                fight_explorer(state)
            }
        },
        EncounterKind::Guardian => match option {
            Some(EncounterOption::UseRelic) => {
                state.player.inventory.remove(Item::Relic);
                state.encounters_mut().resolve_guardian();
                state.message("The Relic shines brightly, unmaking The Guardian in an instant!");
                state.message(
                    "With The Guardian gone, the path forward is clear. You have triumphed!",
                );
                GameLoopResult::Continue
            }
            Some(EncounterOption::UseTeleport) => {
                // Fleeing does not resolve the Guardian; it re-fires on revisit
                state.player.inventory.remove(Item::TeleportationSpell);
                state.message("You used the Teleportation Spell and fled from The Guardian!");
                GameLoopResult::Continue
            }
            _ => {
                state.message("You hesitated and The Guardian attacked!");
                guardian_slays(state)
            }
        },
    }
}

/// Check a riddle answer (the Mad Scientist's second phase).
pub(crate) fn answer_riddle(state: &mut GameState, index: usize, input: &str) -> GameLoopResult {
    let riddle = RIDDLES[index % RIDDLES.len()];
    if riddle.accepts(input) {
        state.message("Mad Scientist: Correct! You may proceed. Brilliant mind!");
    } else {
        state.player.power.deduct(RIDDLE_PENALTY);
        state.message(format!(
            "Mad Scientist: Incorrect! The correct answer was: {}. You lose {} power points.",
            riddle.answer, RIDDLE_PENALTY
        ));
    }
    GameLoopResult::Continue
}

fn pose_riddle(state: &mut GameState) -> GameLoopResult {
    let index = state.rng.index(RIDDLES.len());
    state.message("The Mad Scientist challenges you with a riddle!");
    state.message(RIDDLES[index].question);
    state.set_pending(Pending::Riddle { index });
    GameLoopResult::Continue
}

fn trap_springs(state: &mut GameState) -> GameLoopResult {
    state.player.power.deduct(TRAP_PENALTY);
    state.message(format!(
        "Oh no! You couldn't escape the trap! You lose {TRAP_PENALTY} power points."
    ));
    GameLoopResult::Continue
}

fn fight_explorer(state: &mut GameState) -> GameLoopResult {
    if state.player.power.points() > FIGHT_POWER_THRESHOLD {
        state.message("You overpower the Lost Explorer and take some of his items!");
        explorer_win(state);
    } else {
        state.message("The Lost Explorer overpowers you and takes all your items!");
        state.player.power.deduct(EXPLORER_PENALTY);
        state.player.inventory.clear();
        state.message(format!("You lose {EXPLORER_PENALTY} power points."));
    }
    GameLoopResult::Continue
}

fn explorer_win(state: &mut GameState) {
    let granted = state
        .player
        .inventory
        .grant_random(EXPLORER_REWARD_COUNT, &mut state.rng);
    for item in granted {
        state.message(format!("You received: {item}"));
    }
}

fn guardian_slays(state: &mut GameState) -> GameLoopResult {
    state.message("Overwhelmed by The Guardian, you fall, and the dungeon claims another victim...");
    GameLoopResult::PlayerDied("slain by The Guardian".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parsing() {
        assert_eq!(Selection::parse(" 2 "), Selection::Choice(2));
        assert_eq!(Selection::parse("two"), Selection::Invalid);
        assert_eq!(Selection::parse(""), Selection::Invalid);
    }

    #[test]
    fn selection_pick_rejects_out_of_range() {
        let menu = [EncounterOption::Fight];
        assert_eq!(
            Selection::Choice(1).pick(&menu),
            Some(EncounterOption::Fight)
        );
        assert_eq!(Selection::Choice(0).pick(&menu), None);
        assert_eq!(Selection::Choice(2).pick(&menu), None);
        assert_eq!(Selection::Invalid.pick(&menu), None);
    }

    #[test]
    fn trap_menu_depends_on_tools() {
        let mut inv = InventoryState::new();
        assert_eq!(
            options_for(EncounterKind::Trap, &inv),
            vec![EncounterOption::DoNothing]
        );
        inv.add(Item::Hammer);
        inv.add(Item::FreezeSpell);
        assert_eq!(
            options_for(EncounterKind::Trap, &inv),
            vec![
                EncounterOption::UseHammer,
                EncounterOption::UseFreezeSpell,
                EncounterOption::DoNothing
            ]
        );
    }

    #[test]
    fn explorer_always_offers_a_fight() {
        let inv = InventoryState::new();
        assert_eq!(
            options_for(EncounterKind::LostExplorer, &inv),
            vec![EncounterOption::Fight]
        );
    }

    #[test]
    fn guardian_offers_nothing_to_the_unprepared() {
        let inv = InventoryState::new();
        assert!(options_for(EncounterKind::Guardian, &inv).is_empty());

        let mut armed = InventoryState::new();
        armed.add(Item::Relic);
        armed.add(Item::TeleportationSpell);
        assert_eq!(
            options_for(EncounterKind::Guardian, &armed),
            vec![EncounterOption::UseRelic, EncounterOption::UseTeleport]
        );
    }
}
